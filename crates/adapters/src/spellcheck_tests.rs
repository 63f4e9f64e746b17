// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::os::unix::fs::PermissionsExt;

use super::*;

fn fake_analyzer(tmp: &std::path::Path, body: &str) -> String {
    let script = tmp.join("fake-analyzer.sh");
    std::fs::write(&script, format!("#!/bin/sh\ncat <<'EOF'\n{body}\nEOF\n")).unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();
    script.display().to_string()
}

#[test]
fn parses_the_analyzer_s_json_report() {
    let tmp = tempfile::tempdir().unwrap();
    let executable = fake_analyzer(
        tmp.path(),
        r#"{"teh": {"files": [{"category": "body", "file": "README.md"}]}}"#,
    );
    let checker = SubprocessSpellChecker::new(executable);

    let report = checker.check(tmp.path()).unwrap();
    assert!(report.contains_key("teh"));
    assert_eq!(report["teh"].files[0].category, "body");
}

#[test]
fn a_nonzero_exit_surfaces_as_analyzer_failed() {
    let tmp = tempfile::tempdir().unwrap();
    let script = tmp.path().join("fails.sh");
    std::fs::write(&script, "#!/bin/sh\necho boom >&2\nexit 1\n").unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();

    let checker = SubprocessSpellChecker::new(script.display().to_string());
    let err = checker.check(tmp.path()).unwrap_err();
    assert!(matches!(err, SpellCheckError::AnalyzerFailed(_)));
}
