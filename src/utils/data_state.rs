/// Render mode of a view backed by a single remote read
///
/// One enum instead of separate `loading` / `error` / `data` signals, so a
/// view can never be loading and failed at the same time.
///
/// # Examples
///
/// ```
/// let mut state = use_signal(ViewState::<ClientProfile>::default);
///
/// // Identifier arrives, request goes out:
/// state.set(ViewState::Loading);
///
/// // Request settles:
/// state.set(ViewState::Loaded(profile));
/// // or
/// state.set(ViewState::Error("Failed to load client profile".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing to show: no identifier, or nothing requested yet
    Empty,

    /// A request is outstanding
    Loading,

    /// The request settled with data
    Loaded(T),

    /// The request failed; holds the user-facing message
    Error(String),
}

impl<T> ViewState<T> {
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }

    #[allow(dead_code)]
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    #[allow(dead_code)]
    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    #[allow(dead_code)]
    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    /// Returns the data if loaded, None otherwise
    #[allow(dead_code)]
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if in error state, None otherwise
    #[allow(dead_code)]
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Maps the data using a function if in Loaded state
    pub fn map<U, F>(self, f: F) -> ViewState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ViewState::Empty => ViewState::Empty,
            ViewState::Loading => ViewState::Loading,
            ViewState::Loaded(data) => ViewState::Loaded(f(data)),
            ViewState::Error(msg) => ViewState::Error(msg),
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Empty
    }
}
