//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 환경변수에서 읽습니다. `PROFILE`에 따라 `.env.dev` / `.env.prod`
//! 파일이 먼저 로드되므로 파일 값도 같은 방식으로 반영됩니다.
//!
//! | 환경변수 | 기본값 | 설명 |
//! |----------|--------|------|
//! | `PROFILE` | `dev` | 로드할 `.env` 파일 선택 |
//! | `HOST` | `127.0.0.1` | 바인딩 주소 |
//! | `PORT` | `8080` | 바인딩 포트 |
//! | `SERVER_WORKERS` | `4` | actix 워커 수 |
//! | `RATE_LIMIT_PER_SECOND` | `100` | 초당 허용 요청 수 |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | 버스트 허용량 |
//! | `RUST_LOG` | `info,actix_web=debug` | 로그 필터 |

pub mod server_config;

pub use server_config::*;
