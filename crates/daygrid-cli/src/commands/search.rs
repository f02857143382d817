use daygrid_core::search;

use crate::common;

pub fn run(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let session = common::open_session()?;
    let results = search(session.store(), query);

    if query.trim().is_empty() {
        println!("empty query; nothing to search for");
        return Ok(());
    }
    if results.is_empty() {
        println!("no match found");
        return Ok(());
    }

    for m in &results.events {
        common::print_event(m.day, &m.event);
    }
    println!(
        "{} event(s) across {} day(s)",
        results.events.len(),
        results.days.len()
    );
    Ok(())
}
