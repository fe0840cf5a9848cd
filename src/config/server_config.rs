//! 서버 실행 환경 설정
//!
//! 환경변수에서 서버 바인딩, 워커 수, Rate Limiting 값을 읽어옵니다.
//! 값이 없으면 기본값을, 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// `.env` 파일 선택에 쓰이는 실행 프로필
///
/// `PROFILE` 환경변수로 지정하며 기본값은 `dev`입니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Dev,
    Prod,
    Other(String),
}

impl Profile {
    pub fn current() -> Self {
        Self::from_str(&env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Profile::Dev,
            "prod" | "production" => Profile::Prod,
            other => Profile::Other(other.to_string()),
        }
    }

    /// 로드할 `.env` 파일 이름. 기타 프로필은 기본 `.env`를 사용합니다.
    pub fn env_file(&self) -> Option<&'static str> {
        match self {
            Profile::Dev => Some(".env.dev"),
            Profile::Prod => Some(".env.prod"),
            Profile::Other(_) => None,
        }
    }
}

/// HTTP 서버 바인딩 설정
///
/// * `HOST` - 바인딩 주소 (기본값: 127.0.0.1)
/// * `PORT` - 포트 (기본값: 8080)
/// * `SERVER_WORKERS` - 워커 스레드 수 (기본값: 4)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 4,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_or_default("PORT", env::var("PORT").ok(), defaults.port),
            workers: parse_or_default("SERVER_WORKERS", env::var("SERVER_WORKERS").ok(), defaults.workers),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
///
/// ```bash
/// # .env.dev
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            per_second: parse_or_default(
                "RATE_LIMIT_PER_SECOND",
                env::var("RATE_LIMIT_PER_SECOND").ok(),
                defaults.per_second,
            ),
            burst_size: parse_or_default(
                "RATE_LIMIT_BURST_SIZE",
                env::var("RATE_LIMIT_BURST_SIZE").ok(),
                defaults.burst_size,
            ),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// 환경변수 값을 파싱하고, 없거나 잘못된 경우 기본값을 돌려줍니다.
pub(crate) fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_string() {
        assert_eq!(Profile::from_str("dev"), Profile::Dev);
        assert_eq!(Profile::from_str("PROD"), Profile::Prod);
        assert_eq!(Profile::from_str("staging"), Profile::Other("staging".to_string()));
    }

    #[test]
    fn test_profile_env_file() {
        assert_eq!(Profile::Dev.env_file(), Some(".env.dev"));
        assert_eq!(Profile::Prod.env_file(), Some(".env.prod"));
        assert_eq!(Profile::Other("ci".to_string()).env_file(), None);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default::<u16>("PORT", None, 8080), 8080);
        assert_eq!(parse_or_default::<u16>("PORT", Some(" 9090 ".to_string()), 8080), 9090);
        assert_eq!(parse_or_default::<u16>("PORT", Some("not-a-port".to_string()), 8080), 8080);
        assert_eq!(parse_or_default::<u32>("RATE_LIMIT_BURST_SIZE", Some("-1".to_string()), 200), 200);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_rate_limit_defaults() {
        let config = RateLimitConfig::default();

        assert_eq!(config.per_second, 100);
        assert_eq!(config.burst_size, 200);
    }
}
