/// Generates one actix handler per entry. Every handler takes the pool plus the
/// listed extractors and forwards them to `<name>_impl`. A successful result is
/// sent as JSON with the given status; any error is logged and collapsed into a
/// 500 carrying the fixed message.
#[macro_export]
macro_rules! api_funcs {
    ( $( ( $method:ident, $func_name:ident, $url:expr, [ $( $arg:ident : $arg_ty:ty ),* ], $status:ident, $err:expr ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[$method($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    $( $arg: $arg_ty ),*
                ) -> impl Responder {
                    match [<$func_name _impl>](pool, $( $arg ),*).await {
                        Ok(response) => HttpResponse::$status().json(response),
                        Err(err) => {
                            ::log::error!("{} failed: {:#}", stringify!($func_name), err);
                            HttpResponse::InternalServerError()
                                .json($crate::protocol::ErrorResponse::new($err))
                        }
                    }
                }
            }
        )+
    };
}

use anyhow::{anyhow, Context};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn get_str_pattern<S: AsRef<str>>(s: S) -> String {
    format!("%{}%", s.as_ref())
}

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    const DATE_FMT: &str = "%Y-%m-%d";

    let s = s.as_ref().trim();
    NaiveDate::parse_from_str(s, DATE_FMT).with_context(|| format!("bad date '{}'", s))
}

/// Accepts what a `datetime-local` input produces (with or without seconds),
/// the SQL `DATETIME` literal form and RFC 3339. Zoned values are stored as UTC.
pub fn parse_date_time_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDateTime> {
    const NAIVE_FMTS: [&str; 4] = [
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
    ];

    let s = s.as_ref().trim();
    if let Some(t) = NAIVE_FMTS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Ok(t);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.naive_utc())
        .map_err(|_| anyhow!("bad date/time '{}'", s))
}
