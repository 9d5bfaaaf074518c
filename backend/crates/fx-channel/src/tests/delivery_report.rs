use crate::{
    ChannelError, DeliveryReport, FaultCause, SubscriberDeliveryFault, SubscriberError,
    SubscriptionHandle, SubscriptionId,
};

use fx_core::MessageId;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

fn fault(name: &str) -> SubscriberDeliveryFault {
    SubscriberDeliveryFault {
        subscription_id: SubscriptionId::new(),
        subscriber_name: name.to_string(),
        message_id: MessageId::new(),
        cause: FaultCause::Error(SubscriberError::new("boom")),
    }
}

#[test]
fn given_empty_report_then_zero_deliveries_and_ok() {
    let report = DeliveryReport::new("fluxChannel", MessageId::new());

    assert_that!(report.delivered_count(), eq(0));
    assert_that!(report.attempted_count(), eq(0));
    assert!(!report.has_faults());
    assert_that!(report.into_result(), ok(anything()));
}

#[test]
fn given_recorded_delivery_then_was_delivered_to_matches_handle() {
    // Given
    let id = SubscriptionId::new();
    let handle = SubscriptionHandle::new(id, "s1".to_string(), "fluxChannel".to_string());
    let other = SubscriptionHandle::new(
        SubscriptionId::new(),
        "s2".to_string(),
        "fluxChannel".to_string(),
    );
    let mut report = DeliveryReport::new("fluxChannel", MessageId::new());

    // When
    report.record_delivery(id);

    // Then
    assert!(report.was_delivered_to(&handle));
    assert!(!report.was_delivered_to(&other));
    assert_eq!(report.recipients(), &[id]);
}

#[test]
fn given_fault_then_attempted_includes_it_but_delivered_does_not() {
    let mut report = DeliveryReport::new("fluxChannel", MessageId::new());

    report.record_delivery(SubscriptionId::new());
    report.record_fault(fault("broken"));

    assert_that!(report.delivered_count(), eq(1));
    assert_that!(report.attempted_count(), eq(2));
    assert!(report.has_faults());
}

#[test]
fn given_fault_when_into_result_then_delivery_faults_error() {
    // Given
    let message_id = MessageId::new();
    let mut report = DeliveryReport::new("fluxChannel", message_id);
    report.record_delivery(SubscriptionId::new());
    report.record_fault(fault("broken"));

    // When
    let result = report.into_result();

    // Then
    assert_that!(result, err(anything()));
    match result {
        Err(ChannelError::DeliveryFaults {
            channel,
            message_id: failed_id,
            delivered,
            faults,
            ..
        }) => {
            assert_eq!(channel, "fluxChannel");
            assert_eq!(failed_id, message_id);
            assert_eq!(delivered, 1);
            assert_eq!(faults.len(), 1);
            assert_eq!(faults[0].subscriber_name, "broken");
        }
        other => panic!("expected DeliveryFaults, got {other:?}"),
    }
}

#[test]
fn given_delivery_faults_error_then_message_counts_faults() {
    let mut report = DeliveryReport::new("fluxChannel", MessageId::new());
    report.record_fault(fault("a"));
    report.record_fault(fault("b"));

    let error = report.into_result().unwrap_err();

    assert!(error.to_string().contains("2 subscriber(s) failed"));
    assert_eq!(error.error_code(), "DELIVERY_FAULTS");
}
