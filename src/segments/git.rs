use crate::host::Host;
use crate::utils::debug_with_context;

pub struct GitSegment {
    pub program: String,
}

impl GitSegment {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Current branch of the repository containing `path`.
    ///
    /// Runs `git -C <path> rev-parse --abbrev-ref HEAD` on every call. No
    /// path means no lookup and no subprocess.
    pub async fn get_branch(&self, host: &impl Host, path: Option<&str>) -> Option<String> {
        let path = path.filter(|path| !path.is_empty())?;

        let output = host
            .run_command(&self.program, &["-C", path, "rev-parse", "--abbrev-ref", "HEAD"])
            .await;

        if !output.success {
            debug_with_context("git", &format!("Not in a git repository: {}", path));
            return None;
        }

        let branch = output.stdout.trim_end();
        if branch.is_empty() {
            return None;
        }

        debug_with_context("git", &format!("branch={}", branch));
        Some(branch.to_string())
    }
}

impl Default for GitSegment {
    fn default() -> Self {
        Self::new()
    }
}
