mod common;
mod metrics;
mod scopes;
