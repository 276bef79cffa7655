use anyhow::Result;

/// Process status after the window was closed normally.
pub const SUCCESS_EXIT_CODE: i32 = 0;

/// Process status after any initialization, compile, link or file failure.
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Maps a program outcome to its process exit status.
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => SUCCESS_EXIT_CODE,
        Err(_) => FAILURE_EXIT_CODE,
    }
}

/// Prints the failure chain (if any) to stdout and terminates the process.
pub fn finish(result: Result<()>) -> ! {
    if let Err(err) = &result {
        log::error!("fatal: {err:#}");
        println!("{err:#}");
    }
    std::process::exit(exit_code(&result));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_close_is_zero() {
        assert_eq!(exit_code(&Ok(())), 0);
    }

    #[test]
    fn any_failure_is_minus_one() {
        let failed: Result<()> = Err(anyhow::anyhow!("Failed to create window"));
        assert_eq!(exit_code(&failed), -1);
    }
}
