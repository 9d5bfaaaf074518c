mod delivery_report;

use crate::{BoundedSubscriber, Subscriber};

use std::sync::Arc;

/// Unbounded recording subscriber plus the same instance as a trait object
pub(crate) fn recorder(
    name: &str,
) -> (Arc<BoundedSubscriber<String>>, Arc<dyn Subscriber<String>>) {
    let subscriber = Arc::new(BoundedSubscriber::new(name));
    let dynamic: Arc<dyn Subscriber<String>> = subscriber.clone();
    (subscriber, dynamic)
}
