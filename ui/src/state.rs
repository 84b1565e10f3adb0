use staffdesk_business::{AdminConfig, EmployeesState, PasswordChangeState};
use staffdesk_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context holding business state.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(AdminConfig::default());
        ctx.add_state(EmployeesState::new());
        ctx.add_state(PasswordChangeState::default());

        Self { ctx }
    }
}

impl State {
    /// State wired to an explicit backend URL, for tests.
    pub fn test(base_url: String) -> Self {
        let mut state = Self::default();
        state.ctx.add_state(AdminConfig::new(base_url));
        state
    }
}
