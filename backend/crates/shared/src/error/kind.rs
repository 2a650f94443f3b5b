//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every client crate.

use serde::Serialize;

/// エラー種別の列挙体
///
/// クライアント側で発生するエラーの分類を定義します。
/// リモートから返された HTTP ステータスコードは [`ErrorKind::from_status`] で
/// この分類に変換されます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status(401);
/// assert_eq!(kind, ErrorKind::Unauthenticated);
/// assert_eq!(kind.as_str(), "Unauthenticated");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// デバイス権限（カメラ・位置情報）が拒否された
    PermissionDenied,
    /// 処理が制限時間内に完了しなかった
    Timeout,
    /// デバイスが結果（フレーム等）を生成できなかった
    Device,
    /// 通信路のエラー（接続失敗など）
    Network,
    /// セッション情報が存在しない、または無効
    Unauthenticated,
    /// ローカルまたはリモートのデータが解析できない
    Parse,
    /// リモートがリクエストを拒否した（4xx）
    Rejected,
    /// リモート側の内部エラー（5xx）
    Server,
    /// ローカル永続化ストレージのエラー
    Storage,
    /// クライアント内部エラー
    Internal,
}

impl ErrorKind {
    /// HTTP ステータスコードからエラー種別を決定
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(403), ErrorKind::Unauthenticated);
    /// assert_eq!(ErrorKind::from_status(417), ErrorKind::Rejected);
    /// assert_eq!(ErrorKind::from_status(502), ErrorKind::Server);
    /// ```
    #[inline]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorKind::Unauthenticated,
            408 | 504 => ErrorKind::Timeout,
            400..=499 => ErrorKind::Rejected,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Internal,
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::PermissionDenied.as_str(), "Permission Denied");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::PermissionDenied => "Permission Denied",
            ErrorKind::Timeout => "Timeout",
            ErrorKind::Device => "Device Error",
            ErrorKind::Network => "Network Error",
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::Parse => "Parse Error",
            ErrorKind::Rejected => "Rejected",
            ErrorKind::Server => "Server Error",
            ErrorKind::Storage => "Storage Error",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// ユーザーの再試行操作で回復できるエラーかどうかを判定
    ///
    /// 権限拒否・タイムアウト・通信エラー・デバイスエラーは `true` を返します。
    /// これらは画面上に「再試行」を表示すべきエラーです。
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorKind::PermissionDenied
                | ErrorKind::Timeout
                | ErrorKind::Network
                | ErrorKind::Device
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::Rejected);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthenticated);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Unauthenticated);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::Rejected);
        assert_eq!(ErrorKind::from_status(408), ErrorKind::Timeout);
        assert_eq!(ErrorKind::from_status(417), ErrorKind::Rejected);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Server);
        assert_eq!(ErrorKind::from_status(504), ErrorKind::Timeout);
        assert_eq!(ErrorKind::from_status(302), ErrorKind::Internal);
    }

    #[test]
    fn test_is_recoverable() {
        assert!(ErrorKind::PermissionDenied.is_recoverable());
        assert!(ErrorKind::Timeout.is_recoverable());
        assert!(ErrorKind::Network.is_recoverable());
        assert!(!ErrorKind::Parse.is_recoverable());
        assert!(!ErrorKind::Unauthenticated.is_recoverable());
    }
}
