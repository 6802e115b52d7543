//! Host configuration capability.
//!
//! The engine needs exactly one thing from the surrounding application:
//! where template files live. That single question is modeled as the
//! [`ViewConfig`] trait so the host stays in charge of how the answer
//! is produced. A fixed [`PathBuf`] works for most applications;
//! closures cover dynamic setups such as per-tenant template roots.

use std::path::PathBuf;

/// Where template files live.
///
/// Called once per template resolution, so implementations may return
/// a different root over time.
///
/// # Example
///
/// ```rust,ignore
/// use viewstack::Renderer;
///
/// // Fixed directory:
/// let renderer = Renderer::new("./templates");
///
/// // Or computed per resolve:
/// let renderer = Renderer::with_config(|| current_tenant().template_dir());
/// ```
pub trait ViewConfig {
    /// Returns the base directory for template files.
    fn template_root(&self) -> PathBuf;
}

impl ViewConfig for PathBuf {
    fn template_root(&self) -> PathBuf {
        self.clone()
    }
}

/// Any closure producing a root directory acts as configuration.
impl<F> ViewConfig for F
where
    F: Fn() -> PathBuf,
{
    fn template_root(&self) -> PathBuf {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathbuf_is_config() {
        let config = PathBuf::from("/srv/templates");
        assert_eq!(config.template_root(), PathBuf::from("/srv/templates"));
    }

    #[test]
    fn test_closure_is_config() {
        let config = || PathBuf::from("/srv/themes/dark");
        assert_eq!(config.template_root(), PathBuf::from("/srv/themes/dark"));
    }

    #[test]
    fn test_closure_config_is_consulted_each_call() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let config = || {
            CALLS.fetch_add(1, Ordering::SeqCst);
            PathBuf::from("/srv/templates")
        };

        config.template_root();
        config.template_root();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }
}
