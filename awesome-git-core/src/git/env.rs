//! Process environment variable scoped to a guard's lifetime

/// Sets an environment variable on creation and removes it on drop
///
/// The variable is removed unconditionally, so a value present before the
/// guard was created is not restored.
#[derive(Debug)]
pub struct ScopedEnvVar {
    key: &'static str,
}

impl ScopedEnvVar {
    /// Set `key` to `value` until the returned guard is dropped
    pub fn set(key: &'static str, value: &str) -> Self {
        tracing::debug!(key, value, "Setting scoped environment variable");
        std::env::set_var(key, value);
        Self { key }
    }

    /// Name of the guarded variable
    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl Drop for ScopedEnvVar {
    fn drop(&mut self) {
        std::env::remove_var(self.key);
        tracing::debug!(key = self.key, "Removed scoped environment variable");
    }
}
