use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use shared::{
    domain::{BoardId, ColumnId},
    protocol::{Board, BoardSummary, Column, NewBoard, NewColumn, NewTask, Task, TaskUpdate, User},
};
use tracing::{debug, warn};
use url::Url;

use crate::{error::GatewayError, session::Session};

/// Remote board store boundary.
///
/// Every operation completes or fails; there are no partial responses. A
/// `fetch_board` after a structural mutation returns the full board graph,
/// not a diff, which is what lets the reconciler replace snapshots
/// wholesale instead of maintaining merge logic.
#[async_trait]
pub trait BoardGateway: Send + Sync {
    async fn list_boards(&self) -> Result<Vec<BoardSummary>, GatewayError>;
    async fn create_board(&self, title: &str) -> Result<BoardSummary, GatewayError>;
    async fn delete_board(&self, board_id: BoardId) -> Result<(), GatewayError>;
    async fn fetch_board(&self, board_id: BoardId) -> Result<Board, GatewayError>;
    async fn create_column(
        &self,
        board_id: BoardId,
        column: NewColumn,
    ) -> Result<Column, GatewayError>;
    async fn delete_column(
        &self,
        board_id: BoardId,
        column_id: ColumnId,
    ) -> Result<(), GatewayError>;
    async fn create_task(
        &self,
        board_id: BoardId,
        column_id: ColumnId,
        task: NewTask,
    ) -> Result<Task, GatewayError>;
    async fn update_task(&self, task: &Task) -> Result<Task, GatewayError>;
    /// The delete route is `/boards/{b}/columns/{c}/tasks/{t}`, so the full
    /// task is needed to address it.
    async fn delete_task(&self, task: &Task) -> Result<(), GatewayError>;
    async fn list_users(&self) -> Result<Vec<User>, GatewayError>;
}

/// REST implementation over `reqwest`, one bearer credential per instance.
#[derive(Debug)]
pub struct HttpBoardGateway {
    http: Client,
    base_url: String,
    session: Session,
}

impl HttpBoardGateway {
    pub fn new(base_url: &str, session: Session) -> Result<Self, GatewayError> {
        let parsed = Url::parse(base_url).map_err(|err| {
            GatewayError::Validation(format!("invalid server url {base_url}: {err}"))
        })?;
        Ok(Self {
            http: Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            session,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        debug!(%method, path, "board api request");
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .bearer_auth(self.session.bearer_token())
    }
}

/// Pass a successful response through; classify anything else.
async fn read_ok(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    let err = GatewayError::from_response(status, &body);
    warn!(%status, error = %err, "board api request failed");
    Err(err)
}

#[async_trait]
impl BoardGateway for HttpBoardGateway {
    async fn list_boards(&self) -> Result<Vec<BoardSummary>, GatewayError> {
        let response = self.request(Method::GET, "/boards").send().await?;
        Ok(read_ok(response).await?.json().await?)
    }

    async fn create_board(&self, title: &str) -> Result<BoardSummary, GatewayError> {
        let response = self
            .request(Method::POST, "/boards")
            .json(&NewBoard {
                title: title.to_string(),
            })
            .send()
            .await?;
        Ok(read_ok(response).await?.json().await?)
    }

    async fn delete_board(&self, board_id: BoardId) -> Result<(), GatewayError> {
        let response = self
            .request(Method::DELETE, &format!("/boards/{}", board_id.0))
            .send()
            .await?;
        read_ok(response).await?;
        Ok(())
    }

    async fn fetch_board(&self, board_id: BoardId) -> Result<Board, GatewayError> {
        let response = self
            .request(Method::GET, &format!("/boards/{}", board_id.0))
            .send()
            .await?;
        Ok(read_ok(response).await?.json().await?)
    }

    async fn create_column(
        &self,
        board_id: BoardId,
        column: NewColumn,
    ) -> Result<Column, GatewayError> {
        let response = self
            .request(Method::POST, &format!("/boards/{}/columns", board_id.0))
            .json(&column)
            .send()
            .await?;
        Ok(read_ok(response).await?.json().await?)
    }

    async fn delete_column(
        &self,
        board_id: BoardId,
        column_id: ColumnId,
    ) -> Result<(), GatewayError> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/boards/{}/columns/{}", board_id.0, column_id.0),
            )
            .send()
            .await?;
        read_ok(response).await?;
        Ok(())
    }

    async fn create_task(
        &self,
        board_id: BoardId,
        column_id: ColumnId,
        task: NewTask,
    ) -> Result<Task, GatewayError> {
        let response = self
            .request(
                Method::POST,
                &format!("/boards/{}/columns/{}/tasks", board_id.0, column_id.0),
            )
            .json(&task)
            .send()
            .await?;
        Ok(read_ok(response).await?.json().await?)
    }

    async fn update_task(&self, task: &Task) -> Result<Task, GatewayError> {
        let response = self
            .request(
                Method::PUT,
                &format!(
                    "/boards/{}/columns/{}/tasks/{}",
                    task.board_id.0, task.column_id.0, task.id.0
                ),
            )
            .json(&TaskUpdate::from(task))
            .send()
            .await?;
        Ok(read_ok(response).await?.json().await?)
    }

    async fn delete_task(&self, task: &Task) -> Result<(), GatewayError> {
        let response = self
            .request(
                Method::DELETE,
                &format!(
                    "/boards/{}/columns/{}/tasks/{}",
                    task.board_id.0, task.column_id.0, task.id.0
                ),
            )
            .send()
            .await?;
        read_ok(response).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, GatewayError> {
        let response = self.request(Method::GET, "/users").send().await?;
        Ok(read_ok(response).await?.json().await?)
    }
}
