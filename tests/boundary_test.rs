use git_release_notes::boundary::BoundaryWarning;
use git_release_notes::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_missing_remote_display() {
    let warning = BoundaryWarning::MissingRemote {
        remote: "origin".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("'origin'"),
        "Message should name the remote, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("not be linked"),
        "Message should explain the consequence, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_release_markers_display() {
    let warning = BoundaryWarning::NoReleaseMarkers { tag_count: 3 };

    let display_msg = warning.to_string();
    assert!(
        display_msg.starts_with("3 tag(s)"),
        "Message should carry the tag count, got: {}",
        display_msg
    );
    assert!(display_msg.contains("release marker"));
}

#[test]
fn test_boundary_warning_tags_unavailable_display() {
    let warning = BoundaryWarning::TagsUnavailable {
        reason: "packed-refs unreadable".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "Could not read tags (packed-refs unreadable); notes are listed by commit"
    );
}

#[test]
fn test_boundary_warning_no_commits_display() {
    let warning = BoundaryWarning::NoCommits {
        branch: "develop".to_string(),
        excluded: 0,
    };

    assert_eq!(warning.to_string(), "No commits found on branch 'develop'");
}

#[test]
fn test_boundary_warning_no_commits_after_exclusion_display() {
    let warning = BoundaryWarning::NoCommits {
        branch: "main".to_string(),
        excluded: 5,
    };

    assert_eq!(
        warning.to_string(),
        "No commits left on branch 'main' (5 excluded by filters)"
    );
}

// ============================================================================
// BoundaryWarning Trait Tests
// ============================================================================

#[test]
fn test_boundary_warning_clone_and_eq() {
    let warning = BoundaryWarning::NoReleaseMarkers { tag_count: 1 };
    let cloned = warning.clone();

    assert_eq!(warning, cloned);
    assert_ne!(warning, BoundaryWarning::NoReleaseMarkers { tag_count: 2 });
}

#[test]
fn test_boundary_warning_debug() {
    let warning = BoundaryWarning::MissingRemote {
        remote: "upstream".to_string(),
    };

    let debug = format!("{:?}", warning);
    assert!(debug.contains("MissingRemote"));
    assert!(debug.contains("upstream"));
}

// ============================================================================
// UI Display Tests
// ============================================================================

#[test]
fn test_display_boundary_warning_does_not_panic() {
    // Visual verification test - output is printed to stderr
    ui::display_boundary_warning(&BoundaryWarning::NoCommits {
        branch: "main".to_string(),
        excluded: 0,
    });
}
