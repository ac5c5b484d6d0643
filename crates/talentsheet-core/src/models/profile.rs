use super::applicant::{ApplicantRow, StatusBucket};

/// A matching applicant row as shown in the list and viewer pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Spreadsheet row number of the applicant.
    pub id: usize,
    pub name: String,
    pub email: String,
    pub status: String,
    pub pdf_url: String,
}

impl Profile {
    pub fn from_row(id: usize, row: &ApplicantRow) -> Self {
        Self {
            id,
            name: row.name.clone(),
            email: row.email.clone(),
            status: row.effective_status().to_string(),
            pdf_url: row.pdf_url.clone().unwrap_or_default(),
        }
    }

    pub fn has_pdf(&self) -> bool {
        !self.pdf_url.is_empty()
    }
}

/// Applicant counts per status bucket for one job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub new: usize,
    pub rejected: usize,
    pub shortlisted: usize,
}

impl StatusCounts {
    pub fn get(&self, bucket: StatusBucket) -> usize {
        match bucket {
            StatusBucket::All => self.all,
            StatusBucket::New => self.new,
            StatusBucket::Rejected => self.rejected,
            StatusBucket::Shortlisted => self.shortlisted,
        }
    }

    /// Count one applicant under All and under its own bucket.
    pub fn record(&mut self, bucket: StatusBucket) {
        self.all += 1;
        match bucket {
            StatusBucket::New | StatusBucket::All => self.new += 1,
            StatusBucket::Rejected => self.rejected += 1,
            StatusBucket::Shortlisted => self.shortlisted += 1,
        }
    }

    pub fn entries(&self) -> Vec<(StatusBucket, usize)> {
        StatusBucket::EVERY
            .iter()
            .map(|&bucket| (bucket, self.get(bucket)))
            .collect()
    }
}
