//! Mock gateway implementation for isolating services in tests.

use mockall::mock;

use crate::domain::order::OrderSubmission;
use crate::gateway::OrderGateway;
use crate::gateway::errors::GatewayResult;

mock! {
    pub Gateway {}

    impl OrderGateway for Gateway {
        fn submit(&self, submission: &OrderSubmission) -> GatewayResult<()>;
    }
}
