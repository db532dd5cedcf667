//! Error Kind - Classification of client-side failures
//!
//! Defines the [`ErrorKind`] enum. HTTP failures map to their status code,
//! transport and local failures have no status at all.

use serde::Serialize;

/// エラー種別の列挙体
///
/// バックエンドから受け取った HTTP ステータス、または
/// レスポンスを受け取れなかった場合の失敗を分類します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
/// * `Network` / `Timeout` / `Decode` / `Config` / `Storage` はクライアント側の失敗で、
///   HTTP ステータスコードを持たない
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status(404);
/// assert_eq!(kind, ErrorKind::NotFound);
/// assert_eq!(kind.status_code(), Some(404));
/// assert_eq!(ErrorKind::Network.status_code(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: リクエストが不正
    BadRequest,
    /// 401 - Unauthorized: 認証が必要（セッション破棄の対象）
    Unauthorized,
    /// 403 - Forbidden: アクセス権限なし
    Forbidden,
    /// 404 - Not Found: リソースが見つからない
    NotFound,
    /// 409 - Conflict: 現在の状態と競合
    Conflict,
    /// 422 - Unprocessable Entity: 処理不可能なエンティティ
    UnprocessableEntity,
    /// 429 - Too Many Requests: レート制限超過
    TooManyRequests,
    /// その他の 4xx
    OtherClientError,
    /// 500 - Internal Server Error: サーバー内部エラー
    InternalServerError,
    /// 503 - Service Unavailable: サービス利用不可
    ServiceUnavailable,
    /// その他の 5xx（または想定外のステータス）
    OtherServerError,
    /// レスポンスを受け取れなかった（DNS、接続拒否など）
    Network,
    /// タイムアウト
    Timeout,
    /// レスポンス本文または保存済みデータを解析できなかった
    Decode,
    /// 起動時の設定エラー
    Config,
    /// ローカルストレージの読み書きエラー
    Storage,
}

impl ErrorKind {
    /// HTTP ステータスコードから種別を決定
    ///
    /// ## Arguments
    /// * `status` - バックエンドが返したステータスコード
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
    /// assert_eq!(ErrorKind::from_status(418), ErrorKind::OtherClientError);
    /// assert_eq!(ErrorKind::from_status(502), ErrorKind::OtherServerError);
    /// ```
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            500 => ErrorKind::InternalServerError,
            503 => ErrorKind::ServiceUnavailable,
            400..=499 => ErrorKind::OtherClientError,
            _ => ErrorKind::OtherServerError,
        }
    }

    /// 代表的な HTTP ステータスコードを取得
    ///
    /// ## Returns
    /// HTTP 由来の種別なら `Some(code)`、クライアント側の失敗なら `None`。
    /// `OtherClientError` / `OtherServerError` は代表値（400 / 500）を返します。
    #[inline]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            ErrorKind::BadRequest | ErrorKind::OtherClientError => Some(400),
            ErrorKind::Unauthorized => Some(401),
            ErrorKind::Forbidden => Some(403),
            ErrorKind::NotFound => Some(404),
            ErrorKind::Conflict => Some(409),
            ErrorKind::UnprocessableEntity => Some(422),
            ErrorKind::TooManyRequests => Some(429),
            ErrorKind::InternalServerError | ErrorKind::OtherServerError => Some(500),
            ErrorKind::ServiceUnavailable => Some(503),
            ErrorKind::Network
            | ErrorKind::Timeout
            | ErrorKind::Decode
            | ErrorKind::Config
            | ErrorKind::Storage => None,
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.as_str(), "Bad Request");
    /// assert_eq!(ErrorKind::Timeout.as_str(), "Request Timed Out");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::OtherClientError => "Client Error",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::OtherServerError => "Server Error",
            ErrorKind::Network => "Network Failure",
            ErrorKind::Timeout => "Request Timed Out",
            ErrorKind::Decode => "Malformed Data",
            ErrorKind::Config => "Configuration Error",
            ErrorKind::Storage => "Storage Error",
        }
    }

    /// サーバー側のエラーかどうかを判定
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InternalServerError
                | ErrorKind::ServiceUnavailable
                | ErrorKind::OtherServerError
        )
    }

    /// クライアント側（4xx）のエラーかどうかを判定
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::BadRequest
                | ErrorKind::Unauthorized
                | ErrorKind::Forbidden
                | ErrorKind::NotFound
                | ErrorKind::Conflict
                | ErrorKind::UnprocessableEntity
                | ErrorKind::TooManyRequests
                | ErrorKind::OtherClientError
        )
    }

    /// レスポンスを受け取れなかった失敗かどうか
    ///
    /// 画面側で「再試行してください」と案内する対象です。
    /// このクレートは自動リトライを行いません。
    #[inline]
    pub const fn is_transport(&self) -> bool {
        matches!(self, ErrorKind::Network | ErrorKind::Timeout)
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
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::UnprocessableEntity);
        assert_eq!(ErrorKind::from_status(429), ErrorKind::TooManyRequests);
        assert_eq!(ErrorKind::from_status(451), ErrorKind::OtherClientError);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::InternalServerError);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::ServiceUnavailable);
        assert_eq!(ErrorKind::from_status(504), ErrorKind::OtherServerError);
    }

    #[test]
    fn test_transport_kinds_have_no_status() {
        assert_eq!(ErrorKind::Network.status_code(), None);
        assert_eq!(ErrorKind::Timeout.status_code(), None);
        assert_eq!(ErrorKind::Decode.status_code(), None);
        assert_eq!(ErrorKind::Config.status_code(), None);
        assert_eq!(ErrorKind::Storage.status_code(), None);
        assert!(ErrorKind::Network.is_transport());
        assert!(ErrorKind::Timeout.is_transport());
        assert!(!ErrorKind::Unauthorized.is_transport());
    }

    #[test]
    fn test_is_server_error() {
        assert!(!ErrorKind::BadRequest.is_server_error());
        assert!(!ErrorKind::Network.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::OtherServerError.is_server_error());
    }

    #[test]
    fn test_is_client_error() {
        assert!(ErrorKind::Unauthorized.is_client_error());
        assert!(ErrorKind::OtherClientError.is_client_error());
        assert!(!ErrorKind::Timeout.is_client_error());
        assert!(!ErrorKind::ServiceUnavailable.is_client_error());
    }
}
