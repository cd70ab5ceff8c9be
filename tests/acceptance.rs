//! Acceptance tests for the commit-msg transform.
//!
//! Each test feeds a draft through [`add_change_id`] with the same fixed
//! commit metadata and checks the exact resulting text.

use change_id::hook::{add_change_id, ChangeIdHook, Outcome};
use change_id::model::CommitMetadata;
use change_id::parser::MessageParser;

// ===== Test Helpers =====

const TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
const AUTHOR: &str = "J. Author <ja@example.com> 1250379778 -0330";
const COMMITTER: &str = "J. Committer <jc@example.com> 1250379778 -0330";

const SOB1: &str = "Signed-off-by: J Author <ja@example.com>\n";
const SOB2: &str = "Signed-off-by: J Committer <jc@example.com>\n";

/// Id of the single-paragraph message "a" under the fixed metadata.
const ID_A: &str = "I7fc3876fee63c766a2063df97fbe04a2dddd8d7c";

fn metadata() -> CommitMetadata {
    CommitMetadata::from_raw(TREE, None, AUTHOR, COMMITTER).expect("valid metadata")
}

fn call(draft: &str) -> String {
    add_change_id(draft, &metadata()).text(draft).to_string()
}

fn hook_does_not_modify(draft: &str) {
    let outcome = add_change_id(draft, &metadata());
    assert!(
        !outcome.is_modified(),
        "expected no change for {draft:?}, got {outcome:?}"
    );
    assert_eq!(outcome.text(draft), draft);
}

// ===== Passthrough =====

#[test]
fn empty_messages_are_left_alone() {
    hook_does_not_modify("");
    hook_does_not_modify("\n");
    hook_does_not_modify("\n\n  \n");
    hook_does_not_modify("# on branch master\n# Untracked files:\n");
    hook_does_not_modify(
        "\n# on branch master\ndiff --git a/src b/src\nnew file mode 100644\nindex 0000000..c78b7f0\n",
    );
}

#[test]
fn change_id_already_set() {
    hook_does_not_modify("a\n\nChange-Id: Iaeac9b4149291060228ef0154db2985a31111335\n");
    hook_does_not_modify("fix: this thing\n\nChange-Id: I388bdaf52ed05b55e62a22d0a20d2c1ae0d33e7e\n");
    hook_does_not_modify(
        "fix-a-widget: this thing\n\nChange-Id: Id3bc5359d768a6400450283e12bdfb6cd135ea4b\n",
    );
    hook_does_not_modify("FIX: this thing\n\nChange-Id: I1b55098b5a2cce0b3f3da783dda50d5f79f873fa\n");
    hook_does_not_modify(
        "Fix-A-Widget: this thing\n\nChange-Id: I4f4e2e1e8568ddc1509baecb8c1270a1fb4b6da7\n",
    );
}

#[test]
fn change_id_anywhere_in_footer_counts_as_set() {
    hook_does_not_modify(&format!(
        "a\n\n{SOB1}Change-Id: Iaeac9b4149291060228ef0154db2985a31111335\n{SOB2}"
    ));
}

#[test]
fn change_id_key_is_matched_case_insensitively() {
    hook_does_not_modify("a\n\nchange-id: Iaeac9b4149291060228ef0154db2985a31111335\n");
}

#[test]
fn output_is_a_fixed_point() {
    let once = call(&format!("a\n\nBug: 42\n{SOB1}"));
    assert_eq!(add_change_id(&once, &metadata()), Outcome::AlreadyTagged);
}

// ===== Metadata Sensitivity =====

#[test]
fn time_alters_id() {
    let later = CommitMetadata::from_raw(
        TREE,
        None,
        "J. Author <ja@example.com> 1250379779 -0330",
        "J. Committer <jc@example.com> 1250379779 -0330",
    )
    .unwrap();
    assert_eq!(
        add_change_id("a\n", &later).text("a\n"),
        "a\n\nChange-Id: Ied68048785cafa9aa1120703ae429a4156562ea4\n"
    );
}

#[test]
fn first_parent_alters_id() {
    let child = CommitMetadata::from_raw(
        TREE,
        Some("a3c9e3ce0b0e2ec1bd67b0d2b1f4b85c1c2ee5b4"),
        AUTHOR,
        COMMITTER,
    )
    .unwrap();
    assert_eq!(
        add_change_id("a\n", &child).text("a\n"),
        "a\n\nChange-Id: I8299170899150b332f89b2f2ffe55bc855600a38\n"
    );
}

#[test]
fn tree_alters_id() {
    let other_tree = CommitMetadata::from_raw(
        "5b825dc642cb6eb9a060e54bf8d69288fbee4904",
        None,
        AUTHOR,
        COMMITTER,
    )
    .unwrap();
    assert_eq!(
        add_change_id("a\n", &other_tree).text("a\n"),
        "a\n\nChange-Id: I2a2f9c928de1e5b1541b3cad13613d02af268277\n"
    );
}

// ===== Messages Without Footer =====

#[test]
fn single_line_messages() {
    assert_eq!(call("a\n"), format!("a\n\nChange-Id: {ID_A}\n"));
    assert_eq!(
        call("fix: this thing\n"),
        "fix: this thing\n\nChange-Id: I0f13d0e6c739ca3ae399a05a93792e80feb97f37\n"
    );
    assert_eq!(
        call("fix-a-widget: this thing\n"),
        "fix-a-widget: this thing\n\nChange-Id: I1a1a0c751e4273d532e4046a501a612b9b8a775e\n"
    );
    assert_eq!(
        call("FIX: this thing\n"),
        "FIX: this thing\n\nChange-Id: If816d944c57d3893b60cf10c65931fead1290d97\n"
    );
    assert_eq!(
        call("Fix-A-Widget: this thing\n"),
        "Fix-A-Widget: this thing\n\nChange-Id: I3e18d00cbda2ba1f73aeb63ed8c7d57d7fd16c76\n"
    );
}

#[test]
fn multi_line_messages_without_footer() {
    assert_eq!(
        call("a\n\nb\n"),
        "a\n\nb\n\nChange-Id: Id0b4f42d3d6fc1569595c9b97cb665e738486f5d\n"
    );
    assert_eq!(
        call("a\n\nb\nc\nd\ne\n\nf\ng\nh\n"),
        "a\n\nb\nc\nd\ne\n\nf\ng\nh\n\nChange-Id: I382e662f47bf164d6878b7fe61637873ab7fa4e8\n"
    );
}

#[test]
fn missing_trailing_newline_is_preserved() {
    assert_eq!(call("a"), format!("a\n\nChange-Id: {ID_A}"));
}

#[test]
fn extra_blank_lines_collapse() {
    assert_eq!(call("\n\na\n\n\n\n"), format!("a\n\nChange-Id: {ID_A}\n"));
}

#[test]
fn crlf_endings_are_kept_and_hash_like_lf() {
    assert_eq!(
        call("a\r\n\r\nb\r\n"),
        "a\r\n\r\nb\r\n\r\nChange-Id: Id0b4f42d3d6fc1569595c9b97cb665e738486f5d\r\n"
    );
}

#[test]
fn mixed_line_endings_keep_body_bytes() {
    assert_eq!(
        call("a\r\n\r\nb\nc\n"),
        "a\r\n\r\nb\nc\n\r\nChange-Id: Ie0826403c09e59daebc02e0bd8ddfb473e99492e\r\n"
    );
    assert_eq!(
        call("a\nb\r\n\r\nSigned-off-by: A <a@x>\n"),
        "a\nb\r\n\nChange-Id: Ief89b996d384366f1f1b77bba4ae3bfc3b8b51a7\nSigned-off-by: A <a@x>\n"
    );
}

// ===== Signed-off-by Chains =====

#[test]
fn single_line_message_with_signed_off_by() {
    assert_eq!(
        call(&format!("a\n\n{SOB1}")),
        format!("a\n\nChange-Id: {ID_A}\n{SOB1}")
    );
    assert_eq!(
        call(&format!("a\n\n{SOB1}{SOB2}")),
        format!("a\n\nChange-Id: {ID_A}\n{SOB1}{SOB2}")
    );
}

#[test]
fn multi_line_message_with_signed_off_by() {
    assert_eq!(
        call(&format!("a\n\nb\nc\nd\ne\n\nf\ng\nh\n\n{SOB1}{SOB2}")),
        format!(
            "a\n\nb\nc\nd\ne\n\nf\ng\nh\n\nChange-Id: I382e662f47bf164d6878b7fe61637873ab7fa4e8\n{SOB1}{SOB2}"
        )
    );
}

#[test]
fn key_colon_line_inside_prose_is_not_a_footer() {
    assert_eq!(
        call(&format!("a\n\nb: not a footer\nc\nd\ne\n\nf\ng\nh\n\n{SOB1}{SOB2}")),
        format!(
            "a\n\nb: not a footer\nc\nd\ne\n\nf\ng\nh\n\nChange-Id: I8869aabd44b3017cd55d2d7e0d546a03e3931ee2\n{SOB1}{SOB2}"
        )
    );
}

#[test]
fn note_in_middle() {
    assert_eq!(
        call("a\n\nNOTE: This\ndoes not fix it.\n"),
        "a\n\nNOTE: This\ndoes not fix it.\n\nChange-Id: I988a127969a6ee5e58db546aab74fc46e66847f8\n"
    );
}

#[test]
fn kernel_style_footer() {
    let draft = format!("a\n\n{SOB1}[ja: Fixed\n     the indentation]\n{SOB2}");
    assert_eq!(
        call(&draft),
        format!("a\n\nChange-Id: {ID_A}\n{SOB1}[ja: Fixed\n     the indentation]\n{SOB2}")
    );
}

// ===== Bug / Issue Ordering =====

#[test]
fn change_id_after_bug_or_issue() {
    assert_eq!(
        call(&format!("a\n\nBug: 42\n{SOB1}")),
        format!("a\n\nBug: 42\nChange-Id: {ID_A}\n{SOB1}")
    );
    assert_eq!(
        call(&format!("a\n\nIssue: 42\n{SOB1}")),
        format!("a\n\nIssue: 42\nChange-Id: {ID_A}\n{SOB1}")
    );
}

#[test]
fn change_id_after_whole_leading_bug_run() {
    assert_eq!(
        call("a\n\nBug: 1\nIssue: 2\nReviewed-by: R <r@x>\n"),
        format!("a\n\nBug: 1\nIssue: 2\nChange-Id: {ID_A}\nReviewed-by: R <r@x>\n")
    );
}

#[test]
fn bug_after_other_entry_does_not_move_insertion_point() {
    assert_eq!(
        call(&format!("a\n\n{SOB1}Bug: 42\n")),
        format!("a\n\nChange-Id: {ID_A}\n{SOB1}Bug: 42\n")
    );
}

#[test]
fn lone_bug_entry_gets_change_id_after_it() {
    assert_eq!(
        call("a\n\nBug: 42\n"),
        format!("a\n\nBug: 42\nChange-Id: {ID_A}\n")
    );
}

// ===== Scaffolding =====

#[test]
fn commit_dash_v() {
    let draft = format!(
        "a\n\n{SOB1}{SOB2}\n# on branch master\ndiff --git a/src b/src\nnew file mode 100644\nindex 0000000..c78b7f0\n"
    );
    assert_eq!(
        call(&draft),
        format!("a\n\nChange-Id: {ID_A}\n{SOB1}{SOB2}")
    );
}

#[test]
fn scissors_line_cuts_the_rest() {
    let draft = "a\n# ------------------------ >8 ------------------------\nBug: 1\n";
    assert_eq!(call(draft), format!("a\n\nChange-Id: {ID_A}\n"));
}

#[test]
fn custom_comment_char() {
    let hook = ChangeIdHook::new(MessageParser::new(';'));
    let draft = "a\n; Please enter the commit message\n# not a comment here\n";
    let outcome = hook.run(draft, &metadata());
    let text = outcome.text(draft);
    assert!(text.starts_with("a\n# not a comment here\n\nChange-Id: I"));
    assert_ne!(outcome.change_id().map(|id| id.as_str()), Some(ID_A));
}

// ===== URLs and False Tags =====

#[test]
fn with_ending_url() {
    for (url, id) in [
        ("http", "I3b7e4e16b503ce00f07ba6ad01d97a356dad7701"),
        ("https", "I62b9039e2fc0dce274af55e8f99312a8a80a805d"),
        ("ftp", "I71b05dc1f6b9a5540a53a693e64d58b65a8910e8"),
        ("git", "Id34e942baa68d790633737d815ddf11bac9183e5"),
    ] {
        let draft = format!("a\n\n{url}://example.com/ fixes this\n");
        assert_eq!(
            call(&draft),
            format!("a\n\n{url}://example.com/ fixes this\n\nChange-Id: {id}\n"),
            "url scheme {url}"
        );
    }
}

#[test]
fn with_false_tags() {
    assert_eq!(
        call("foo\n\nFakeLine:\n  foo\n  bar\n\nRealTag: abc\n"),
        "foo\n\nFakeLine:\n  foo\n  bar\n\nChange-Id: I1a923838b665fc2a64707b2728176b95b552cdfa\nRealTag: abc\n"
    );
}

// ===== Determinism =====

#[test]
fn trailers_do_not_alter_id() {
    for draft in [
        "a\n".to_string(),
        format!("a\n\n{SOB1}"),
        "a\n\nBug: 42\n".to_string(),
        format!("a\n\nIssue: 7\n{SOB1}{SOB2}"),
        "a\n\nReviewed-on: https://review.example.com/1\n".to_string(),
    ] {
        let outcome = add_change_id(&draft, &metadata());
        assert_eq!(
            outcome.change_id().map(|id| id.as_str()),
            Some(ID_A),
            "draft {draft:?}"
        );
    }
}

#[test]
fn disabled_hook_returns_draft() {
    let hook = ChangeIdHook::default().enabled(false);
    let outcome = hook.run("a\n", &metadata());
    assert_eq!(outcome, Outcome::Disabled);
    assert_eq!(outcome.text("a\n"), "a\n");
}
