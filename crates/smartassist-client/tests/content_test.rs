mod common;

use chrono::NaiveDate;
use common::{spawn_app, spawn_app_without_profile, today};
use smartassist_client::{ClientError, JsonFileProgressStore, ProgressStore};
use smartassist_core::{Category, DueDateType, LeadStatus, Plan, UpgradeContext};

// =============================================================================
// Reminders
// =============================================================================

#[tokio::test]
async fn upcoming_merges_custom_with_statutory() {
    let t = spawn_app(Plan::Free).await;

    let due = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
    let custom = t
        .app
        .reminders
        .create_custom("  Pay shop rent ", "Landlord wants cash", due, true)
        .await
        .unwrap();
    assert_eq!(custom.title, "Pay shop rent");
    assert_eq!(custom.due_date_type, DueDateType::Custom);
    assert_eq!(custom.user_email.as_deref(), Some(common::EMAIL));

    let titles: Vec<String> = t
        .app
        .reminders
        .upcoming(3)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(
        titles,
        vec!["Pay shop rent", "GSTR-1 for July 2025", "GSTR-3B for July 2025"]
    );
}

#[tokio::test]
async fn all_reminders_sorted_including_past() {
    let t = spawn_app(Plan::Free).await;

    let all = t.app.reminders.all().await.unwrap();
    assert_eq!(all.len(), 29);
    assert!(all.windows(2).all(|w| w[0].due_date <= w[1].due_date));
    // May 2025 filings are already past on 1 August but still listed.
    assert_eq!(all[0].title, "GSTR-1 for April 2025");
}

#[tokio::test]
async fn custom_reminder_needs_title() {
    let t = spawn_app(Plan::Free).await;
    assert!(matches!(
        t.app.reminders.create_custom("   ", "", today(), true).await,
        Err(ClientError::Validation(_))
    ));
}

// =============================================================================
// Learning
// =============================================================================

#[tokio::test]
async fn category_view_tracks_completion() {
    let t = spawn_app_without_profile();

    let view = t.app.learning.category(Category::GstBasics).await.unwrap();
    let orders: Vec<u32> = view.topics.iter().map(|t| t.display_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(view.completion_percentage, 0);

    t.app
        .learning
        .complete_topic(Category::GstBasics, "Registration threshold")
        .unwrap();
    let view = t.app.learning.category(Category::GstBasics).await.unwrap();
    assert_eq!(view.completion_percentage, 33);

    // Progress survives a fresh store over the same file.
    let reopened = JsonFileProgressStore::new(t.progress_path());
    assert!(reopened
        .load()
        .is_complete(Category::GstBasics, "Registration threshold"));
}

#[tokio::test]
async fn quiz_answers() {
    let t = spawn_app_without_profile();

    let wrong = t
        .app
        .learning
        .check_quiz(Category::GstBasics, "CGST, SGST and IGST", "CGST")
        .await
        .unwrap();
    assert!(!wrong.correct);
    assert_eq!(wrong.correct_answer, "IGST");
    assert!(!t
        .app
        .learning
        .progress()
        .is_complete(Category::GstBasics, "CGST, SGST and IGST"));

    let right = t
        .app
        .learning
        .check_quiz(Category::GstBasics, "CGST, SGST and IGST", "  igst ")
        .await
        .unwrap();
    assert!(right.correct);
    assert!(right.explanation.is_some());
    assert!(t
        .app
        .learning
        .progress()
        .is_complete(Category::GstBasics, "CGST, SGST and IGST"));
}

#[tokio::test]
async fn quiz_on_missing_topic_or_quiz() {
    let t = spawn_app_without_profile();

    assert!(matches!(
        t.app
            .learning
            .check_quiz(Category::Itc, "No such lesson", "x")
            .await,
        Err(ClientError::NotFound { .. })
    ));
    assert!(matches!(
        t.app
            .learning
            .check_quiz(Category::GstBasics, "Registration threshold", "x")
            .await,
        Err(ClientError::NotFound { .. })
    ));
}

#[tokio::test]
async fn corrupt_progress_file_starts_fresh() {
    let t = spawn_app_without_profile();
    std::fs::write(t.progress_path(), "[1, 2, 3").unwrap();

    let view = t.app.learning.category(Category::Filing).await.unwrap();
    assert_eq!(view.completion_percentage, 0);

    t.app
        .learning
        .complete_topic(Category::Filing, "GSTR-1")
        .unwrap();
    assert_eq!(
        t.app
            .learning
            .category(Category::Filing)
            .await
            .unwrap()
            .completion_percentage,
        50
    );
}

// =============================================================================
// Tips and CA Support
// =============================================================================

#[tokio::test]
async fn free_plan_sees_premium_tips_locked() {
    let t = spawn_app(Plan::Free).await;

    let tips = t.app.support.visible_tips().await.unwrap();
    assert!(!tips.is_empty());
    for view in &tips {
        assert_eq!(view.locked, view.tip.is_premium_only);
        if view.locked {
            assert!(view.tip.full_content.is_empty());
            assert!(!view.tip.short_description.is_empty());
        }
    }
}

#[tokio::test]
async fn premium_plan_sees_every_tip() {
    let t = spawn_app(Plan::Premium).await;

    let tips = t.app.support.visible_tips().await.unwrap();
    assert!(tips
        .iter()
        .all(|v| !v.locked && !v.tip.full_content.is_empty()));
}

#[tokio::test]
async fn ca_support_is_premium_only() {
    let t = spawn_app(Plan::Free).await;

    let err = t
        .app
        .support
        .submit_query("Asha", "9876543210", "How do I claim ITC?", None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::UpgradeRequired(UpgradeContext::CaSupport)
    ));
    assert!(t.app.support.my_queries().await.unwrap().is_empty());
}

#[tokio::test]
async fn premium_query_is_recorded() {
    let t = spawn_app(Plan::Premium).await;

    let lead = t
        .app
        .support
        .submit_query(
            " Asha ",
            "098765 43210",
            "GSTR-2B does not match my purchase register",
            Some("purchases.pdf".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(lead.name, "Asha");
    assert_eq!(lead.phone, "9876543210");
    assert_eq!(lead.user_email, common::EMAIL);
    assert_eq!(lead.status, LeadStatus::Pending);

    let queries = t.app.support.my_queries().await.unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].id, lead.id);
}

#[tokio::test]
async fn premium_query_accepts_long_description() {
    let t = spawn_app(Plan::Premium).await;

    let query = "I filed GSTR-1 for July late and my buyer's GSTR-2B does not show \
                 the invoices. Their ITC is now blocked and they are holding my \
                 payment. Can I amend in the next return, and will late fees or \
                 interest apply on my side? I also need to know whether a credit \
                 note changes anything here.";
    assert!(query.chars().count() > 200);

    let lead = t
        .app
        .support
        .submit_query("Asha", "9876543210", query, None)
        .await
        .unwrap();
    assert_eq!(lead.query_description, query);
}
