// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::sync::Arc;

use super::*;

#[test]
fn add_repo_save_records_under_the_final_path_segment() {
    let store = Arc::new(Store::open_in_memory().unwrap());
    let interaction = TerminalInteraction::new(Arc::clone(&store));

    interaction
        .add_repo_save(
            "/tmp/data/owner-repo",
            "the",
            "teh",
            &["README.md".to_string()],
        )
        .unwrap();

    let saves: HashMap<String, RepoSave> = store.get_json("repository_saves", HashMap::new()).unwrap();
    let save = &saves["owner-repo"];
    assert_eq!(save.add_word, "the");
    assert_eq!(save.del_word, "teh");
    assert_eq!(save.repodir, "/tmp/data/owner-repo");
}
