//! Static help topics shown by `bubble info <topic>`

pub struct Topic {
    pub key: &'static str,
    pub text: &'static str,
}

/// Registered topics, in the order they are listed
pub static TOPICS: &[Topic] = &[
    Topic {
        key: "bytemods",
        text: "Info ~> \n\nBytemods -> Bytemods is a process which intentionally *breaks* a suite of class files for testing",
    },
    Topic {
        key: "classbasket",
        text: "Info ~> \n\nClassbasket -> The class basket is a directory of small Java snippets compiled with javac to serve as class file fixtures for the JVM tests",
    },
    Topic {
        key: "release",
        text: "Info ~> \n\nRelease -> Set the BUBBLE_RELEASE environment variable to exactly \"true\" to make buildjvm produce an optimized release build",
    },
];

pub fn lookup(key: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.key == key)
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    TOPICS.iter().map(|topic| topic.key)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bytemods_is_registered() {
        let topic = lookup("bytemods").unwrap();
        assert!(topic.text.starts_with("Info ~> \n\nBytemods -> "));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(lookup("ByteMods").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn keys_are_listed_in_registration_order() {
        assert_eq!(
            keys().collect::<Vec<_>>(),
            vec!["bytemods", "classbasket", "release"]
        );
    }
}
