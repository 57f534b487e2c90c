use ripple_application::use_cases::CheckPropagationUseCase;
use ripple_domain::RunDefaults;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_propagation: Arc<CheckPropagationUseCase>,
    pub defaults: Arc<RunDefaults>,
}
