use detect_client::{validate_origin, ResultToken};
use execution::{install, run, Outcome};
use tracing::{info, warn};

use super::ProbeRuntime;

impl ProbeRuntime {
    /// Process one operator-supplied test identifier end to end.
    ///
    /// The wire protocol folds "send result" and "ask for next work" into
    /// a single request: the follow-up fetch carries an empty test id and
    /// the result token. The original clients express that as recursion;
    /// here it is an explicit loop carrying the pending token, so a
    /// long-running probe never grows its call stack.
    ///
    /// Every failure below abandons the current iteration and returns the
    /// probe to awaiting the next identifier; none of them are fatal.
    pub async fn run_cycle(&mut self, test_id: &str) {
        let Some(session) = self.session.clone() else {
            warn!("cannot run tests before registration");
            return;
        };

        let mut current_id = test_id.to_string();
        let mut pending = String::new();

        loop {
            let artifact = match self.client.fetch(&session, &current_id, &pending).await {
                Ok(artifact) => artifact,
                Err(err) => {
                    warn!(error = %err, test_id = %current_id, "failed retrieving test, abandoning cycle");
                    return;
                }
            };

            if current_id.is_empty() {
                // Report-only pass: the result token has been delivered.
                break;
            }

            if let Err(err) =
                validate_origin(&artifact.served_from, &current_id, &self.config.ca_host)
            {
                warn!(error = %err, test_id = %current_id, "refusing artifact from unvalidated origin");
                return;
            }

            let path = match install(&self.config.binary_dir(), &current_id, &artifact.body) {
                Ok(path) => path,
                Err(err) => {
                    warn!(error = %err, test_id = %current_id, "failed installing artifact");
                    return;
                }
            };

            let token = match run(&path) {
                Ok(Outcome::Completed(code)) => {
                    info!(test_id = %current_id, code, "test completed");
                    ResultToken::new(&current_id, code)
                }
                Ok(Outcome::Missing) => {
                    warn!(test_id = %current_id, "test was quarantined before execution");
                    ResultToken::quarantined(&current_id)
                }
                Err(err) => {
                    warn!(error = %err, test_id = %current_id, "failed executing artifact");
                    return;
                }
            };

            pending = token.to_string();
            current_id = String::new();
        }

        self.cycles_completed += 1;
    }
}
