use cornwell_engine::window::RuntimeError;

pub const EXIT_SUCCESS: i32 = 0;
/// Returned for any startup or loop failure.
pub const EXIT_FAILURE: i32 = -1;

pub fn exit_code(result: &Result<(), RuntimeError>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_shutdown_is_zero() {
        assert_eq!(exit_code(&Ok(())), 0);
    }

    #[test]
    fn every_failure_is_minus_one() {
        let failures = [
            RuntimeError::EventLoop(anyhow::anyhow!("no display server")),
            RuntimeError::WindowCreation(anyhow::anyhow!("no window")),
            RuntimeError::Gpu(anyhow::anyhow!("no adapter")),
            RuntimeError::Loop(anyhow::anyhow!("lost connection")),
        ];
        for err in failures {
            assert_eq!(exit_code(&Err(err)), -1);
        }
    }
}
