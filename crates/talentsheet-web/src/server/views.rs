use askama::Template;
use talentsheet_core::models::{Profile, StatusBucket};

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home<'a> {
    pub timestamp: String,
    pub reviewer: &'a str,
}

#[derive(Template)]
#[template(path = "profiles.html")]
pub struct Profiles<'a> {
    pub timestamp: String,
    pub reviewer: &'a str,
    pub job_id: &'a str,
    pub counts: Vec<(StatusBucket, usize)>,
}

#[derive(Template)]
#[template(path = "profile_list.html")]
pub struct ProfileList<'a> {
    pub timestamp: String,
    pub reviewer: &'a str,
    pub job_id: &'a str,
    pub status: &'a str,
    pub filters: [StatusBucket; 4],
    pub profiles: Vec<Profile>,
}

#[derive(Template)]
#[template(path = "profile_view.html")]
pub struct ProfileView<'a> {
    pub timestamp: String,
    pub reviewer: &'a str,
    pub job_id: &'a str,
    pub profile_id: &'a str,
    pub pdf_url: &'a str,
}
