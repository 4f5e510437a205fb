/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Settings for test suites that can run against live services.
//!
//! Live tests are skipped unless `RUN_LIVE_TESTS` is set to a non-empty value. The
//! `setup-test-env` binary prints the shell exports that enable them:
//!
//! ```text
//! eval "$(setup-test-env sk-my-api-key)"
//! ```

use std::ffi::OsStr;

/// Environment variable holding the OpenAI API key used by live tests
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Environment variable that enables tests making real external calls
pub const RUN_LIVE_TESTS: &str = "RUN_LIVE_TESTS";

/// Test environment settings read from environment variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestEnv {
    openai_api_key: Option<String>,
    run_live_tests: bool,
}

impl TestEnv {
    /// Read the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    /// Read the settings from the given `(name, value)` pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let mut env = TestEnv::default();
        for (name, value) in vars {
            let value = value.as_ref();
            if name.as_ref() == OPENAI_API_KEY {
                env.openai_api_key = value.to_str().map(str::to_owned);
            } else if name.as_ref() == RUN_LIVE_TESTS {
                env.run_live_tests = !value.is_empty();
            }
        }
        env
    }

    /// The OpenAI API key, if set.
    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref()
    }

    /// Whether tests that call live services should run.
    pub fn live_tests_enabled(&self) -> bool {
        self.run_live_tests
    }
}

/// The variables to export to enable live tests with `api_key`.
pub fn exports(api_key: &str) -> [(&'static str, String); 2] {
    [
        (OPENAI_API_KEY, api_key.to_owned()),
        (RUN_LIVE_TESTS, "1".to_owned()),
    ]
}

/// Render [`exports`] as POSIX shell `export` statements, one per line.
pub fn shell_exports(api_key: &str) -> String {
    exports(api_key)
        .iter()
        .map(|(name, value)| format!("export {name}={}\n", shell_quote(value)))
        .collect()
}

/// Quote `value` so a POSIX shell reads it back verbatim.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
