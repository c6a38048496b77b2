mod advanced;
mod push;
mod report;

pub use advanced::AdvancedService;
pub use push::PushService;
pub use report::ReportService;

/// 以逗号拼接消息ID，用作查询参数
fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
