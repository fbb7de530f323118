use crate::console::Tone;
use crate::info;
use crate::session::Session;

/// The main entry point for the 'info' command
pub fn run(session: &mut Session, topic: Option<&str>) -> anyhow::Result<()> {
    let Some(key) = topic else {
        return list_topics(session, "Please provide an info ID. Available options ->");
    };

    match info::lookup(key) {
        Some(topic) => {
            let console = session.console();
            console.paint(Tone::Status, topic.text)?;
            console.plain("\n")?;
        }
        None => list_topics(session, "Please provide a valid info ID. Available options ->")?,
    }

    Ok(())
}

fn list_topics(session: &mut Session, heading: &str) -> anyhow::Result<()> {
    let console = session.console();
    console.plain("\n")?;
    console.paint(Tone::Failure, heading)?;
    console.plain("\n")?;
    for key in info::keys() {
        console.paint(Tone::Status, &format!("~ {}", key))?;
        console.plain("\n")?;
    }
    console.plain("\n")?;

    Ok(())
}
