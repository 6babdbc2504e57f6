//! Status column formatting from condition history.

use crate::crd::{ClusterServiceBrokerStatus, ServiceBrokerCondition};

fn last_condition(status: Option<&ClusterServiceBrokerStatus>) -> Option<&ServiceBrokerCondition> {
    status.and_then(|s| s.conditions.last())
}

/// `"<type> - <reason>"` for the most recent condition, empty when there is none.
pub fn format_status_short(status: Option<&ClusterServiceBrokerStatus>) -> String {
    match last_condition(status) {
        Some(cond) => format!("{} - {}", cond.r#type, cond.reason),
        None => String::new(),
    }
}

/// Short form followed by the message and timestamp on indented lines.
pub fn format_status_full(status: Option<&ClusterServiceBrokerStatus>) -> String {
    match last_condition(status) {
        Some(cond) => format!(
            "{} - {}\n\t{}\n\t{}",
            cond.r#type, cond.reason, cond.message, cond.last_transition_time
        ),
        None => String::new(),
    }
}
