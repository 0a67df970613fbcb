use std::sync::Mutex;

use ghfinder::github::auth::token_from_env;
use ghfinder::github::client::{parse_profile_response, parse_repositories_response};
use ghfinder::github::{
    FetchError, GithubApi, GithubClient, Profile, Repository, fetch_snapshot, validate_username,
};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION};

const PROFILE_JSON: &str = r#"{
    "login": "octocat",
    "id": 583231,
    "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
    "html_url": "https://github.com/octocat",
    "name": "The Octocat",
    "bio": null,
    "public_repos": 8,
    "followers": 9000,
    "following": 9
}"#;

const REPOS_JSON: &str = r#"[
    {
        "id": 1296269,
        "name": "Hello-World",
        "full_name": "octocat/Hello-World",
        "html_url": "https://github.com/octocat/Hello-World",
        "description": "My first repository on GitHub!",
        "stargazers_count": 80,
        "forks_count": 9,
        "language": null,
        "updated_at": "2011-01-26T19:14:43Z"
    },
    {
        "id": 64778136,
        "name": "linguist",
        "html_url": "https://github.com/octocat/linguist",
        "description": "",
        "stargazers_count": 0,
        "forks_count": 1,
        "language": "Ruby"
    }
]"#;

// --- Response interpretation ---

#[test]
fn test_profile_success_parses_fields() {
    let profile = parse_profile_response(StatusCode::OK, PROFILE_JSON).unwrap();
    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.followers, 9000);
    assert_eq!(profile.public_repos, 8);
    assert_eq!(profile.html_url, "https://github.com/octocat");
    assert_eq!(profile.bio, None);
    assert_eq!(profile.bio_text(), "No bio available");
    assert_eq!(profile.heading(), "The Octocat (octocat)");
}

#[test]
fn test_profile_404_surfaces_api_message() {
    let err = parse_profile_response(StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#)
        .unwrap_err();
    assert_eq!(err, FetchError::Profile("Not Found".into()));
    assert_eq!(err.to_string(), "Not Found");
}

#[test]
fn test_profile_error_without_message_defaults() {
    let err = parse_profile_response(StatusCode::FORBIDDEN, "{}").unwrap_err();
    assert_eq!(err.to_string(), "User not found");

    let err = parse_profile_response(StatusCode::NOT_FOUND, r#"{"message":""}"#).unwrap_err();
    assert_eq!(err.to_string(), "User not found");

    let err = parse_profile_response(StatusCode::NOT_FOUND, "[]").unwrap_err();
    assert_eq!(err.to_string(), "User not found");
}

#[test]
fn test_profile_error_with_non_json_body_is_transport_error() {
    let err = parse_profile_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[test]
fn test_profile_success_with_malformed_body_is_transport_error() {
    let err = parse_profile_response(StatusCode::OK, "{\"login\":").unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[test]
fn test_repositories_success_parses_and_defaults() {
    let repos = parse_repositories_response(StatusCode::OK, REPOS_JSON).unwrap();
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].id, 1296269);
    assert_eq!(repos[0].language_text(), "N/A");
    assert!(repos[0].updated_at.is_some());
    assert_eq!(repos[1].description_text(), "No description provided");
    assert_eq!(repos[1].language_text(), "Ruby");
    assert!(repos[1].updated_at.is_none());
}

#[test]
fn test_repositories_failure_ignores_body() {
    let err = parse_repositories_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"message":"Server Error"}"#,
    )
    .unwrap_err();
    assert_eq!(err, FetchError::Repositories);
    assert_eq!(err.to_string(), "Failed to fetch repositories");
}

// --- Username validation ---

#[test]
fn test_blank_username_rejected() {
    assert_eq!(validate_username(""), Err(FetchError::BlankUsername));
    assert_eq!(validate_username("   \t"), Err(FetchError::BlankUsername));
    assert_eq!(
        FetchError::BlankUsername.to_string(),
        "Please enter a username"
    );
}

#[test]
fn test_username_is_trimmed() {
    assert_eq!(validate_username("  octocat "), Ok("octocat"));
}

// --- URL building ---

#[test]
fn test_client_requires_https() {
    assert!(GithubClient::new("t", "http://api.github.com").is_err());
}

#[test]
fn test_profile_url() {
    let client = GithubClient::new("t", "https://api.github.com").unwrap();
    let url = client.user_url("octocat", false).unwrap();
    assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
}

#[test]
fn test_repos_url_has_paging_and_sort() {
    let client = GithubClient::new("t", "https://api.github.com").unwrap();
    let url = client.user_url("octocat", true).unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.github.com/users/octocat/repos?per_page=100&sort=updated"
    );
}

#[test]
fn test_url_keeps_enterprise_prefix_and_escapes_username() {
    let client = GithubClient::new("t", "https://ghe.example.com/api/v3/").unwrap();
    let url = client.user_url("a/b", false).unwrap();
    assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/users/a%2Fb");
}

// --- Request headers ---

#[test]
fn test_both_requests_carry_token_and_accept_headers() {
    let client = GithubClient::new("t", "https://api.github.com").unwrap();
    for repos in [false, true] {
        let url = client.user_url("octocat", repos).unwrap();
        let req = client.build_request(url.clone()).unwrap();
        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(req.url(), &url);
        assert_eq!(req.headers()[AUTHORIZATION], "token t");
        assert_eq!(req.headers()[ACCEPT], "application/vnd.github+json");
    }
}

// --- Token lookup ---

#[test]
fn test_token_prefers_github_token() {
    let token = token_from_env(|key| match key {
        "GITHUB_TOKEN" => Some("primary".into()),
        "GH_TOKEN" => Some("secondary".into()),
        _ => None,
    });
    assert_eq!(token.as_deref(), Some("primary"));
}

#[test]
fn test_token_skips_blank_values() {
    let token = token_from_env(|key| match key {
        "GITHUB_TOKEN" => Some("  ".into()),
        "GH_TOKEN" => Some("secondary".into()),
        _ => None,
    });
    assert_eq!(token.as_deref(), Some("secondary"));
}

#[test]
fn test_token_missing() {
    assert_eq!(token_from_env(|_| None), None);
}

// --- Pipeline ---

struct FakeApi {
    profile: Result<Profile, FetchError>,
    repos: Result<Vec<Repository>, FetchError>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn new(
        profile: Result<Profile, FetchError>,
        repos: Result<Vec<Repository>, FetchError>,
    ) -> Self {
        Self {
            profile,
            repos,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl GithubApi for FakeApi {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, FetchError> {
        self.calls.lock().unwrap().push(format!("profile:{username}"));
        self.profile.clone()
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        self.calls.lock().unwrap().push(format!("repos:{username}"));
        self.repos.clone()
    }
}

fn octocat() -> Profile {
    parse_profile_response(StatusCode::OK, PROFILE_JSON).unwrap()
}

fn repos() -> Vec<Repository> {
    parse_repositories_response(StatusCode::OK, REPOS_JSON).unwrap()
}

#[tokio::test]
async fn test_snapshot_fetches_profile_then_repos() {
    let api = FakeApi::new(Ok(octocat()), Ok(repos()));

    let snapshot = fetch_snapshot(&api, "octocat").await.unwrap();
    assert_eq!(snapshot.profile.login, "octocat");
    assert_eq!(snapshot.repos.len(), 2);
    assert_eq!(api.calls(), vec!["profile:octocat", "repos:octocat"]);
}

#[tokio::test]
async fn test_profile_failure_skips_repo_request() {
    let api = FakeApi::new(Err(FetchError::Profile("Not Found".into())), Ok(repos()));

    let err = fetch_snapshot(&api, "ghost").await.unwrap_err();
    assert_eq!(err.to_string(), "Not Found");
    assert_eq!(api.calls(), vec!["profile:ghost"]);
}

#[tokio::test]
async fn test_repo_failure_discards_profile() {
    let api = FakeApi::new(Ok(octocat()), Err(FetchError::Repositories));

    let err = fetch_snapshot(&api, "octocat").await.unwrap_err();
    assert_eq!(err, FetchError::Repositories);
    assert_eq!(api.calls().len(), 2);
}
