pub mod push_subscriptions;
