use holocron_test_utils::prelude::*;

use crate::server::error::Error;
