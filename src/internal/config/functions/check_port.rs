use std::fmt::Display;

use crate::internal::error::ConfigError;

/// 校验输入是否为合法的 TCP/UDP 端口（1 到 65535）
///
/// 接受任何可显示的值，先按整数解析，再做范围检查：
/// - 非数字 -> `NotNumber`
/// - 超出范围 -> `BadPortNumber`
pub fn check_port_number(port: impl Display) -> Result<u16, ConfigError> {
    let raw = port.to_string();

    let number: i64 = raw.trim().parse().map_err(|_| {
        tracing::error!(port = %raw, "端口不是数字");
        ConfigError::NotNumber(raw.clone())
    })?;

    u16::try_from(number)
        .ok()
        .filter(|p| *p != 0)
        .ok_or_else(|| {
            tracing::error!(port = number, "端口超出范围");
            ConfigError::BadPortNumber(number)
        })
}
