//! 永続化インフラストラクチャの実装
//!
//! ドメイン層で定義されたセッションリポジトリの具体的な実装を提供します。
//! ローカルのJSONファイルに保存する実装と、テスト用のインメモリ実装が含まれます。

mod in_memory_repository;
mod json_file_repository;

// 公開APIの再エクスポート
pub use in_memory_repository::InMemorySessionRepository;
pub use json_file_repository::{JsonFileSessionRepository, SESSION_FILE_NAME};
