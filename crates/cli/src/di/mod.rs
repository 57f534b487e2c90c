use ripple_application::use_cases::CheckPropagationUseCase;
use ripple_domain::RunDefaults;
use ripple_infrastructure::dns::{
    DnsExchange, HickoryTargetChecker, ReferralWalker, SystemAddressLookup, WireExchange,
};
use std::sync::Arc;
use tracing::debug;

pub struct Services {
    pub check_propagation: Arc<CheckPropagationUseCase>,
}

impl Services {
    pub fn new(defaults: &RunDefaults) -> Self {
        let exchange: Arc<dyn DnsExchange> = Arc::new(WireExchange::new());
        let lookup = Arc::new(SystemAddressLookup::new(defaults.query_timeout));

        let discovery = ReferralWalker::new(exchange.clone(), lookup, defaults.query_timeout);
        let checker = HickoryTargetChecker::new(exchange);

        debug!(
            root_servers = defaults.root_servers.len(),
            public_resolvers = defaults.public_resolvers.len(),
            "Services wired"
        );

        Self {
            check_propagation: Arc::new(CheckPropagationUseCase::new(
                Arc::new(discovery),
                Arc::new(checker),
            )),
        }
    }
}
