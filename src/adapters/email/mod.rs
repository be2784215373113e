//! Email adapters - Notifier implementations.

mod resend_notifier;

pub use resend_notifier::ResendNotifier;
