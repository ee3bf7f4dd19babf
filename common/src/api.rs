//! Catalogue of the exam API's endpoints.
//!
//! `Endpoint` is pure data: the front-end's data-access module turns it into a
//! request, so URL building and auth requirements can be checked without a
//! browser.

use url::Url;

use crate::auth::AuthToken;
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Value of the `groupBy` query parameter of `GET /tests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Disciplines,
    Teachers,
}

impl Grouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grouping::Disciplines => "disciplines",
            Grouping::Teachers => "teachers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    SignUp,
    SignIn,
    Tests(Grouping),
    Categories,
    Teachers,
    Disciplines,
    TeachersByDiscipline(String),
    CreateTest,
    CountView(u64),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::SignUp | Endpoint::SignIn | Endpoint::CreateTest => Method::Post,
            Endpoint::CountView(_) => Method::Patch,
            Endpoint::Tests(_)
            | Endpoint::Categories
            | Endpoint::Teachers
            | Endpoint::Disciplines
            | Endpoint::TeachersByDiscipline(_) => Method::Get,
        }
    }

    /// Everything except sign-up and sign-in needs a bearer token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::SignUp | Endpoint::SignIn)
    }

    /// Value of the `Authorization` header to send with this endpoint.
    ///
    /// Authenticated endpoints fail without a token; anonymous ones never
    /// carry one.
    pub fn authorization(&self, token: Option<&AuthToken>) -> Result<Option<String>> {
        if !self.requires_auth() {
            return Ok(None);
        }
        match token {
            Some(token) => Ok(Some(token.bearer())),
            None => Err(ApiError::Request(format!("{:?} requires a session token", self))),
        }
    }

    fn segments(&self) -> Vec<String> {
        let fixed = |parts: &[&str]| parts.iter().map(|part| part.to_string()).collect();
        match self {
            Endpoint::SignUp => fixed(&["sign-up"]),
            Endpoint::SignIn => fixed(&["sign-in"]),
            Endpoint::Tests(_) | Endpoint::CreateTest => fixed(&["tests"]),
            Endpoint::Categories => fixed(&["categories"]),
            Endpoint::Teachers => fixed(&["teachers"]),
            Endpoint::Disciplines => fixed(&["disciplines"]),
            Endpoint::TeachersByDiscipline(discipline) => {
                vec!["teachers".to_string(), discipline.clone()]
            }
            Endpoint::CountView(id) => {
                vec!["tests".to_string(), id.to_string(), "countView".to_string()]
            }
        }
    }

    /// Absolute URL of this endpoint below `base`.
    ///
    /// Path segments are percent-encoded, so a discipline name containing
    /// spaces, accents or a `/` stays a single segment.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(format!("{} cannot carry a path", base)))?;
            path.pop_if_empty();
            path.extend(self.segments());
        }

        if let Endpoint::Tests(grouping) = self {
            url.query_pairs_mut().append_pair("groupBy", grouping.as_str());
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:5000/").unwrap()
    }

    #[test]
    fn test_grouped_tests_urls() {
        let url = Endpoint::Tests(Grouping::Disciplines).url(&base()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/tests?groupBy=disciplines");

        let url = Endpoint::Tests(Grouping::Teachers).url(&base()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/tests?groupBy=teachers");
    }

    #[test]
    fn test_discipline_name_is_percent_encoded() {
        let url = Endpoint::TeachersByDiscipline("Cálculo 1".to_string())
            .url(&base())
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/teachers/C%C3%A1lculo%201");

        let url = Endpoint::TeachersByDiscipline("CSS/HTML".to_string())
            .url(&base())
            .unwrap();
        assert_eq!(url.path(), "/teachers/CSS%2FHTML");
    }

    #[test]
    fn test_count_view_url_and_method() {
        let endpoint = Endpoint::CountView(42);
        assert_eq!(endpoint.method(), Method::Patch);
        assert_eq!(
            endpoint.url(&base()).unwrap().as_str(),
            "http://localhost:5000/tests/42/countView"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let base = Url::parse("https://api.example.com/v1?debug=1").unwrap();
        let url = Endpoint::Categories.url(&base).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/categories");
    }

    #[test]
    fn test_only_sign_up_and_sign_in_are_anonymous() {
        let anonymous = [Endpoint::SignUp, Endpoint::SignIn];
        for endpoint in anonymous {
            assert!(!endpoint.requires_auth());
            assert_eq!(endpoint.method(), Method::Post);
        }

        let authenticated = [
            Endpoint::Tests(Grouping::Disciplines),
            Endpoint::Tests(Grouping::Teachers),
            Endpoint::Categories,
            Endpoint::Teachers,
            Endpoint::Disciplines,
            Endpoint::TeachersByDiscipline("Física".to_string()),
            Endpoint::CreateTest,
            Endpoint::CountView(1),
        ];
        for endpoint in authenticated {
            assert!(endpoint.requires_auth(), "{:?} should need a token", endpoint);
        }
    }

    #[test]
    fn test_authenticated_endpoint_without_token_is_refused() {
        let err = Endpoint::Categories.authorization(None).unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));

        let token = AuthToken::new("abc").unwrap();
        assert_eq!(
            Endpoint::CountView(3).authorization(Some(&token)).unwrap(),
            Some("Bearer abc".to_string())
        );
    }

    #[test]
    fn test_anonymous_endpoint_sends_no_token() {
        let token = AuthToken::new("abc").unwrap();
        assert_eq!(Endpoint::SignIn.authorization(Some(&token)).unwrap(), None);
        assert_eq!(Endpoint::SignUp.authorization(None).unwrap(), None);
    }

    #[test]
    fn test_create_test_posts_to_tests() {
        assert_eq!(Endpoint::CreateTest.method(), Method::Post);
        assert_eq!(
            Endpoint::CreateTest.url(&base()).unwrap().as_str(),
            "http://localhost:5000/tests"
        );
    }
}
