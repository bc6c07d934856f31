//! BDD step definitions for status descriptions

use cucumber::{then, when};

use review_watcher::catalog::ReviewStatus;
use review_watcher::response::HomeworkRecord;
use review_watcher::status::{extract, format_message};
use review_watcher::WatcherError;

use crate::world::ReviewWatcherWorld;

#[when(expr = "a homework {string} with status {string} is described")]
fn homework_described(world: &mut ReviewWatcherWorld, name: String, status: String) {
    world.described = Some(extract(&HomeworkRecord::new(name, status)));
}

#[then(expr = "the description should be the {string} verdict for {string}")]
fn description_is_verdict(world: &mut ReviewWatcherWorld, status: String, name: String) {
    let status = ReviewStatus::from_code(&status).expect("status must be in the catalog");
    let described = world.described.as_ref().expect("nothing described");
    match described {
        Ok(message) => assert_eq!(message, &format_message(&name, status)),
        Err(e) => panic!("expected a description, got error {}", e),
    }
}

#[then(expr = "describing should fail with unknown status {string}")]
fn describing_fails(world: &mut ReviewWatcherWorld, code: String) {
    let described = world.described.as_ref().expect("nothing described");
    match described {
        Err(WatcherError::UnknownStatus(actual)) => assert_eq!(actual, &code),
        other => panic!("expected UnknownStatus, got {:?}", other),
    }
}
