use magicgrid_core::session::LoadTicket;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Name of the file currently displayed.
    pub file_name: Option<String>,

    /// Load waiting on the worker, if any.
    pub pending_load: Option<LoadTicket>,

    /// A file is being dragged over the window.
    pub drag_hover: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
