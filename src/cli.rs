//! Command-line interface.

use clap::Parser;

use crate::config::DEFAULT_PORT;

/// Personal Aid API: loopback health-check sidecar
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "personal-aid-api", version, about)]
pub struct Args {
    /// TCP port to listen on (loopback only)
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_argument_uses_default_port() {
        let args = Args::try_parse_from(["personal-aid-api"]).unwrap();
        assert_eq!(args.port, 18008);
    }

    #[test]
    fn test_port_argument() {
        let args = Args::try_parse_from(["personal-aid-api", "19000"]).unwrap();
        assert_eq!(args.port, 19000);
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        assert!(Args::try_parse_from(["personal-aid-api", "abc"]).is_err());
    }

    #[test]
    fn test_out_of_range_port_is_rejected() {
        assert!(Args::try_parse_from(["personal-aid-api", "70000"]).is_err());
        assert!(Args::try_parse_from(["personal-aid-api", "-1"]).is_err());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert!(Args::try_parse_from(["personal-aid-api", "18008", "18009"]).is_err());
    }
}
