mod common;

use std::sync::Arc;

use common::{spawn_app, spawn_app_without_profile};
use smartassist_client::services::invoice::InvoiceForm;
use smartassist_client::{ClientError, Clock, FixedClock, InvoiceService};
use smartassist_core::entitlement::{billing_period_index, BILLING_PERIOD_MS};
use smartassist_core::time::NANOS_PER_MILLI;
use smartassist_core::{Plan, UpgradeContext};

const PERIOD_NANOS: i64 = BILLING_PERIOD_MS * NANOS_PER_MILLI;

fn form() -> InvoiceForm {
    InvoiceForm {
        customer_name: "Ravi Traders".to_string(),
        customer_phone: "+91 98765 43210".to_string(),
        item_name: "Steel rods".to_string(),
        quantity: "3".to_string(),
        price: "250".to_string(),
        gst_slab: "18".to_string(),
    }
}

#[tokio::test]
async fn free_plan_allows_three_invoices_per_period() {
    let t = spawn_app(Plan::Free).await;

    for _ in 0..3 {
        let invoice = t.app.invoices.create(&form()).await.unwrap();
        assert_eq!(invoice.item_total, 750.0);
        assert_eq!(invoice.gst_amount, 135.0);
        assert_eq!(invoice.grand_total, 885.0);
        assert_eq!(invoice.customer_phone, "9876543210");
    }

    let quota = t.app.invoices.quota().await.unwrap();
    assert_eq!(quota.used, 3);
    assert_eq!(quota.remaining, Some(0));
    assert_eq!(quota.to_string(), "3 of 3 invoices used this period");

    let err = t.app.invoices.create(&form()).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::InvoiceLimitReached { used: 3, limit: 3 }
    ));
    assert_eq!(err.upgrade_context(), Some(UpgradeContext::InvoiceLimit));
    assert_eq!(t.app.invoices.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn quota_resets_at_period_boundary() {
    let t = spawn_app(Plan::Free).await;

    let period = billing_period_index(t.clock.now_nanos());
    let next_period_start = (period + 1) * PERIOD_NANOS;

    t.clock.set(next_period_start - 1);
    for _ in 0..3 {
        t.app.invoices.create(&form()).await.unwrap();
    }
    assert!(t.app.invoices.create(&form()).await.is_err());

    t.clock.set(next_period_start);
    let quota = t.app.invoices.quota().await.unwrap();
    assert_eq!(quota.used, 0);
    assert!(t.app.invoices.create(&form()).await.is_ok());
}

#[tokio::test]
async fn premium_plan_is_unlimited() {
    let t = spawn_app(Plan::Premium).await;

    for _ in 0..6 {
        t.app.invoices.create(&form()).await.unwrap();
    }

    let quota = t.app.invoices.quota().await.unwrap();
    assert_eq!(quota.used, 6);
    assert_eq!(quota.limit, None);
    assert_eq!(quota.to_string(), "Unlimited invoices");
}

#[tokio::test]
async fn invalid_form_does_not_use_quota() {
    let t = spawn_app(Plan::Free).await;

    let mut bad_quantity = form();
    bad_quantity.quantity = "0".to_string();
    assert!(matches!(
        t.app.invoices.create(&bad_quantity).await,
        Err(ClientError::Validation(_))
    ));

    let mut bad_phone = form();
    bad_phone.customer_phone = "12345".to_string();
    assert!(matches!(
        t.app.invoices.create(&bad_phone).await,
        Err(ClientError::Validation(_))
    ));

    let mut bad_slab = form();
    bad_slab.gst_slab = "15".to_string();
    assert!(matches!(
        t.app.invoices.create(&bad_slab).await,
        Err(ClientError::Validation(_))
    ));

    assert_eq!(t.app.invoices.quota().await.unwrap().used, 0);
}

#[tokio::test]
async fn create_requires_profile() {
    let t = spawn_app_without_profile();
    assert!(matches!(
        t.app.invoices.create(&form()).await,
        Err(ClientError::ProfileNotFound)
    ));
}

#[tokio::test]
async fn list_is_newest_first_and_delete_frees_quota() {
    let t = spawn_app(Plan::Free).await;

    let first = t.app.invoices.create(&form()).await.unwrap();
    t.clock.advance(1_000);
    let second = t.app.invoices.create(&form()).await.unwrap();
    t.clock.advance(1_000);
    t.app.invoices.create(&form()).await.unwrap();

    let listed = t.app.invoices.list().await.unwrap();
    assert_eq!(listed.last().unwrap().invoice_number, first.invoice_number);

    t.app.invoices.delete(&second.invoice_number).await.unwrap();
    assert!(matches!(
        t.app.invoices.delete(&second.invoice_number).await,
        Err(ClientError::NotFound { .. })
    ));

    assert_eq!(t.app.invoices.quota().await.unwrap().remaining, Some(1));
    assert!(t.app.invoices.create(&form()).await.is_ok());
}

#[tokio::test]
async fn backend_refusal_reports_limit_as_used() {
    let t = spawn_app(Plan::Free).await;
    for _ in 0..3 {
        t.app.invoices.create(&form()).await.unwrap();
    }

    // A service clock one period ahead counts nothing; the backend still
    // counts three and refuses.
    let ahead = Arc::new(FixedClock::new(t.clock.now_nanos() + PERIOD_NANOS));
    let service = InvoiceService::new(t.backend.clone(), ahead);
    assert_eq!(service.quota().await.unwrap().used, 0);

    let err = service.create(&form()).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::InvoiceLimitReached { used: 3, limit: 3 }
    ));
}
