//! Integration tests for a shopper's session

use std::time::Duration;

use rusty_money::{Money, iso::BRL};
use testresult::TestResult;
use tokio::time::Instant;

use vitrine::prelude::*;

fn registration_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "Carlos".to_string(),
        last_name: "Oliveira".to_string(),
        email: "carlos@example.com".to_string(),
        cpf: "111.222.333-44".to_string(),
        age: "41".to_string(),
        phone: "(21) 97777-6666".to_string(),
        city: "Rio de Janeiro".to_string(),
        password: "relogio".to_string(),
        confirm_password: "relogio".to_string(),
        accept_terms: true,
    }
}

#[tokio::test(start_paused = true)]
async fn empty_email_login_fails_and_stays_signed_out() -> TestResult {
    let context = StoreContext::bundled(StoreSettings::default())?;
    let mut store = context.storefront();

    let result = store.login("", "x").await;

    assert!(matches!(
        result,
        Err(StorefrontError::Auth(AuthError::MissingCredentials))
    ));
    assert!(!store.is_authenticated());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn login_waits_for_simulated_latency() -> TestResult {
    let context = StoreContext::bundled(StoreSettings::default())?;
    let mut store = context.storefront();
    let started = Instant::now();

    let user = store.login("ana@example.com", "x").await?;

    assert_eq!(user.email, "ana@example.com");
    assert!(
        started.elapsed() >= Duration::from_secs(1),
        "login should wait for the simulated backend"
    );

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn full_purchase_flow() -> TestResult {
    let context = StoreContext::bundled(StoreSettings::default())?;
    let mut store = context.storefront();

    assert_eq!(
        store.add_to_cart("2"),
        Err(StorefrontError::NotAuthenticated)
    );

    store.login("demo@christianwatches.com", "senha").await?;

    assert_eq!(store.add_to_cart("2")?, 1);
    assert_eq!(store.add_to_cart("2")?, 2);
    assert_eq!(store.add_to_cart("5")?, 1);

    let subtotal = store.subtotal()?;
    let shipping = store.shipping()?;

    assert_eq!(subtotal, Money::from_minor(3_499_700, BRL));
    assert_eq!(store.total()?, subtotal.add(shipping)?);

    let confirmation = store.checkout().await?;

    assert_eq!(confirmation.summary.lines.len(), 2);
    assert_eq!(confirmation.total(), Money::from_minor(3_499_700, BRL));
    assert!(store.lines().is_empty());
    assert_eq!(store.subtotal()?, Money::from_minor(0, BRL));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn small_cart_pays_shipping_until_threshold() -> TestResult {
    let context = StoreContext::bundled(StoreSettings::default())?;
    let mut store = context.storefront();
    store.login("ana@example.com", "x").await?;

    store.add_to_cart("100")?;

    assert_eq!(store.shipping()?, Money::from_minor(4_990, BRL));

    store.update_quantity("100", 2);

    assert_eq!(store.subtotal()?, Money::from_minor(599_800, BRL));
    assert_eq!(store.shipping()?, Money::from_minor(0, BRL));

    store.update_quantity("100", 0);

    assert!(store.lines().is_empty());
    assert_eq!(store.total()?, Money::from_minor(0, BRL));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn custom_shipping_policy_applies_to_new_sessions() -> TestResult {
    let settings = StoreSettings {
        shipping: ShippingPolicy::new(
            Money::from_minor(1_000_000, BRL),
            Money::from_minor(9_900, BRL),
        ),
        latency: Duration::ZERO,
    };
    let context = StoreContext::bundled(settings)?;
    let mut store = context.storefront();
    store.login("ana@example.com", "x").await?;

    store.add_to_cart("3")?;

    assert_eq!(store.shipping()?, Money::from_minor(9_900, BRL));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn registered_customers_cannot_open_dashboard() -> TestResult {
    let context = StoreContext::bundled(StoreSettings::default())?;
    let mut store = context.storefront();

    let user = store.register(registration_form()).await?;

    assert!(!user.is_vendor);
    assert_eq!(user.full_name(), "Carlos Oliveira");
    assert!(matches!(store.dashboard(), Err(StorefrontError::NotVendor)));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn invalid_registration_reports_reason() -> TestResult {
    let context = StoreContext::bundled(StoreSettings::default())?;
    let mut store = context.storefront();

    let result = store
        .register(RegistrationForm {
            confirm_password: "outra".to_string(),
            ..registration_form()
        })
        .await;

    assert!(matches!(
        result,
        Err(StorefrontError::Auth(AuthError::PasswordMismatch))
    ));
    assert!(!store.is_authenticated());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn contact_form_needs_every_field() -> TestResult {
    let context = StoreContext::bundled(StoreSettings::default())?;
    let store = context.storefront();

    let message = ContactMessage {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        subject: "Garantia".to_string(),
        message: "Meu relógio parou.".to_string(),
    };

    store.send_contact_message(&message).await?;

    let blank = ContactMessage {
        message: String::new(),
        ..message
    };

    assert_eq!(
        store.send_contact_message(&blank).await,
        Err(StorefrontError::MissingField("message"))
    );

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn sessions_do_not_share_carts() -> TestResult {
    let context = StoreContext::bundled(StoreSettings::default())?;
    let mut first = context.storefront();
    let second = context.storefront();

    first.login("ana@example.com", "x").await?;
    first.add_to_cart("7")?;

    assert_eq!(first.lines().len(), 1);
    assert!(second.lines().is_empty());
    assert!(!second.is_authenticated());

    Ok(())
}
