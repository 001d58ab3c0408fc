//! docvc - An In-Memory Version-Control Core for Text Documents
//!
//! This binary replays a small documentation-editing session against the
//! workspace API: commit, status, stash, branch, switch, merge, then the
//! log and a diff of the final edit.

use docvc::store::{User, VcsResult};
use docvc::workspace::Workspace;

fn main() -> VcsResult<()> {
    let ws = Workspace::new("project-docs", User::new("u1", "Alice"));

    // Track a first document and commit it.
    ws.add_changes("readme.md", "Version 1");
    println!("{}", ws.commit("Initial Readme"));
    println!("{}", ws.status());

    // Edit it, then park the edit on the stash.
    ws.modify_changes("readme.md", "Version 2")?;
    println!("{}", ws.status());
    println!("{}", ws.stash());
    println!("{}", ws.status());

    // Branch off and do some feature work. The stash stays behind on
    // main, so popping here finds nothing.
    ws.create_branch("feature-x");
    println!("{}", ws.switch_branch("feature-x")?);
    println!("{}", ws.stash_pop());

    ws.add_changes("newFeature", "Introducing new feature to the app");
    println!("{}", ws.commit("Added feature X section"));

    // Back on main, recover the parked edit.
    println!("{}", ws.switch_branch("main")?);
    println!("{}", ws.stash_pop());
    println!("{}", ws.status());

    // Fold the feature branch in.
    println!("{}", ws.merge_branches("feature-x", "main")?);

    // One more edit on main, committed, so there is something to diff.
    let before = ws.head("main")?;
    ws.modify_changes("readme.md", "Version 3")?;
    println!("{}", ws.commit("Polished readme"));
    let after = ws.head("main")?;

    println!();
    for entry in ws.log() {
        println!("{}", entry);
    }

    println!();
    println!("{}", ws.diff(&before, &after));

    Ok(())
}
