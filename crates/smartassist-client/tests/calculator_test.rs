mod common;

use common::{spawn_app, spawn_app_without_profile};
use smartassist_client::ClientError;
use smartassist_core::{GstSlab, Plan};

#[tokio::test]
async fn preview_exclusive_and_inclusive() {
    let t = spawn_app_without_profile();

    let exclusive = t.app.calculator.preview("1000", "18", false).unwrap();
    assert_eq!(exclusive.gst_amount, 180.0);
    assert_eq!(exclusive.cgst, 90.0);
    assert_eq!(exclusive.sgst, 90.0);
    assert_eq!(exclusive.total_amount, 1180.0);

    let inclusive = t.app.calculator.preview("1180", "18%", true).unwrap();
    assert_eq!(inclusive.gst_amount, 180.0);
    assert_eq!(inclusive.total_amount, 1180.0);
    assert_eq!(inclusive.taxable_value(), 1000.0);
}

#[tokio::test]
async fn preview_rejects_bad_input() {
    let t = spawn_app_without_profile();

    for (amount, slab) in [("", "18"), ("abc", "18"), ("-5", "18"), ("100", "15")] {
        assert!(
            matches!(
                t.app.calculator.preview(amount, slab, false),
                Err(ClientError::Validation(_))
            ),
            "{amount:?} @ {slab:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn save_requires_profile() {
    let t = spawn_app_without_profile();
    assert!(matches!(
        t.app.calculator.save("1000", "18", false).await,
        Err(ClientError::ProfileNotFound)
    ));
}

#[tokio::test]
async fn history_is_newest_first() {
    let t = spawn_app(Plan::Free).await;

    let first = t.app.calculator.save("100", "5", false).await.unwrap();
    t.clock.advance(1_000);
    let second = t.app.calculator.save("2500", "28", false).await.unwrap();

    assert_eq!(first.gst_slab, GstSlab::Slab5);
    assert_eq!(first.total_amount, 105.0);
    assert_eq!(second.gst_amount, 700.0);
    assert!(second.is_saved);

    let history = t.app.calculator.history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].timestamp, second.timestamp);
    assert_eq!(history[1].timestamp, first.timestamp);
}

#[tokio::test]
async fn delete_calculation() {
    let t = spawn_app(Plan::Free).await;

    let saved = t.app.calculator.save("1000", "12", true).await.unwrap();
    t.app.calculator.delete(saved.timestamp).await.unwrap();

    assert!(t.app.calculator.history().await.unwrap().is_empty());
    assert!(matches!(
        t.app.calculator.delete(saved.timestamp).await,
        Err(ClientError::NotFound { .. })
    ));
}
