//! A generated fragment plus the runtime condition under which the templating engine includes it.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SqlFragment {
    /// Inclusion test, e.g. `userName != null`. `None` means always included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,
    pub body: String,
}

impl SqlFragment {
    pub fn always(body: impl Into<String>) -> Self {
        SqlFragment {
            guard: None,
            body: body.into(),
        }
    }

    pub fn guarded(guard: impl Into<String>, body: impl Into<String>) -> Self {
        SqlFragment {
            guard: Some(guard.into()),
            body: body.into(),
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }
}
