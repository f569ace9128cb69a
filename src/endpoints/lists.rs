//! The **Lists** endpoint.

use crate::endpoints::list_array;
use crate::endpoints::users::UserRef;
use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models::{ListMode, TwitterList, UsersPage};
use crate::response::Response;

/// Options for `lists/create`.
#[derive(Debug, Clone)]
pub struct CreateListOptions {
    /// Name of the new list
    pub name: String,

    /// Visibility of the new list
    pub mode: ListMode,

    /// Description of the new list
    pub description: String,
}

impl CreateListOptions {
    /// Options creating a public list named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: ListMode::Public,
            description: String::new(),
        }
    }

    fn form(&self) -> Vec<(String, String)> {
        let mut form = vec![("name".to_string(), self.name.clone())];
        if self.mode == ListMode::Private {
            form.push(("mode".into(), "private".into()));
        }
        if !self.description.is_empty() {
            form.push(("description".into(), self.description.clone()));
        }
        form
    }
}

/// Raw layer of the lists endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawLists<'a> {
    http: &'a HttpClient,
}

impl<'a> RawLists<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET lists/show`: information about a single list.
    pub async fn show(&self, list_id: i64) -> TwitterResult<RawResponse> {
        let query = vec![("list_id".to_string(), list_id.to_string())];
        self.http.get("/1.1/lists/show.json", &query).await
    }

    /// `GET lists/list`: the lists a user owns or subscribes to.
    pub async fn list(&self, user: &UserRef) -> TwitterResult<RawResponse> {
        let mut query = Vec::new();
        user.append_to(&mut query);
        self.http.get("/1.1/lists/list.json", &query).await
    }

    /// `GET lists/memberships`: the lists a user has been added to.
    pub async fn memberships(&self, user: &UserRef, cursor: i64) -> TwitterResult<RawResponse> {
        let mut query = Vec::new();
        user.append_to(&mut query);
        if cursor != 0 {
            query.push(("cursor".into(), cursor.to_string()));
        }
        self.http.get("/1.1/lists/memberships.json", &query).await
    }

    /// `GET lists/members`: a cursored page of a list's members.
    pub async fn members(&self, list_id: i64, cursor: i64) -> TwitterResult<RawResponse> {
        let mut query = vec![("list_id".to_string(), list_id.to_string())];
        if cursor != 0 {
            query.push(("cursor".into(), cursor.to_string()));
        }
        self.http.get("/1.1/lists/members.json", &query).await
    }

    /// `POST lists/create`: create a list for the authenticating user.
    pub async fn create(&self, options: &CreateListOptions) -> TwitterResult<RawResponse> {
        self.http.post_form("/1.1/lists/create.json", &options.form()).await
    }

    /// `POST lists/destroy`: delete a list of the authenticating user.
    pub async fn destroy(&self, list_id: i64) -> TwitterResult<RawResponse> {
        let form = vec![("list_id".to_string(), list_id.to_string())];
        self.http.post_form("/1.1/lists/destroy.json", &form).await
    }

    /// `POST lists/members/create`: add a member to a list.
    pub async fn add_member(&self, list_id: i64, user: &UserRef) -> TwitterResult<RawResponse> {
        let mut form = vec![("list_id".to_string(), list_id.to_string())];
        user.append_to(&mut form);
        self.http.post_form("/1.1/lists/members/create.json", &form).await
    }

    /// `POST lists/members/destroy`: remove a member from a list.
    pub async fn remove_member(&self, list_id: i64, user: &UserRef) -> TwitterResult<RawResponse> {
        let mut form = vec![("list_id".to_string(), list_id.to_string())];
        user.append_to(&mut form);
        self.http
            .post_form("/1.1/lists/members/destroy.json", &form)
            .await
    }
}

/// Typed layer of the lists endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Lists<'a> {
    raw: RawLists<'a>,
}

impl<'a> Lists<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawLists::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawLists<'a> {
        self.raw
    }

    /// Get information about a single list.
    pub async fn show(&self, list_id: i64) -> TwitterResult<Response<TwitterList>> {
        Response::parse(&self.raw.show(list_id).await?, TwitterList::parse)
    }

    /// Get the lists a user owns or subscribes to.
    pub async fn list(&self, user: impl Into<UserRef>) -> TwitterResult<Response<Vec<TwitterList>>> {
        Response::parse(&self.raw.list(&user.into()).await?, list_array)
    }

    /// Get the lists a user has been added to. The response body's `lists`
    /// array is cursored like every other paginated endpoint.
    pub async fn memberships(
        &self,
        user: impl Into<UserRef>,
        cursor: i64,
    ) -> TwitterResult<Response<Vec<TwitterList>>> {
        Response::parse(&self.raw.memberships(&user.into(), cursor).await?, |node| {
            node.get("lists").and_then(list_array)
        })
    }

    /// Get a page of a list's members.
    pub async fn members(&self, list_id: i64, cursor: i64) -> TwitterResult<Response<UsersPage>> {
        Response::parse(&self.raw.members(list_id, cursor).await?, UsersPage::parse)
    }

    /// Create a list for the authenticating user; the new list is returned.
    pub async fn create(&self, options: &CreateListOptions) -> TwitterResult<Response<TwitterList>> {
        Response::parse(&self.raw.create(options).await?, TwitterList::parse)
    }

    /// Delete a list of the authenticating user; the deleted list is
    /// returned.
    pub async fn destroy(&self, list_id: i64) -> TwitterResult<Response<TwitterList>> {
        Response::parse(&self.raw.destroy(list_id).await?, TwitterList::parse)
    }

    /// Add a member to a list; the updated list is returned.
    pub async fn add_member(
        &self,
        list_id: i64,
        user: impl Into<UserRef>,
    ) -> TwitterResult<Response<TwitterList>> {
        Response::parse(
            &self.raw.add_member(list_id, &user.into()).await?,
            TwitterList::parse,
        )
    }

    /// Remove a member from a list; the updated list is returned.
    pub async fn remove_member(
        &self,
        list_id: i64,
        user: impl Into<UserRef>,
    ) -> TwitterResult<Response<TwitterList>> {
        Response::parse(
            &self.raw.remove_member(list_id, &user.into()).await?,
            TwitterList::parse,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_serializes_only_non_defaults() {
        assert_eq!(
            CreateListOptions::new("team").form(),
            vec![("name".to_string(), "team".to_string())]
        );

        let options = CreateListOptions {
            mode: ListMode::Private,
            description: "internal".into(),
            ..CreateListOptions::new("team")
        };
        let form = options.form();

        assert!(form.contains(&("mode".into(), "private".into())));
        assert!(form.contains(&("description".into(), "internal".into())));
    }
}
