//! Seed data for the demo binary and the scenario tests: 4 users
//! (3 regular, 1 admin) and 9 certificates, 3 per regular user —
//! one active, one expiring soon, one expired against the reference
//! date 2026-02-24.

use chrono::NaiveDate;

use crate::cert::{Certificate, Role, User};

pub const DEPARTMENTS: [&str; 4] = ["Engineering", "Analytics", "Infrastructure", "Management"];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Ashish Dohare".to_string(),
            email: "ashish@gmail.com".to_string(),
            password: "user123".to_string(),
            role: Role::User,
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Ashish".to_string()),
            designation: "Software Engineer".to_string(),
            department: "Engineering".to_string(),
        },
        User {
            id: "u2".to_string(),
            name: "Sohan Kumar Sahu".to_string(),
            email: "sohan@gmail.com".to_string(),
            password: "user123".to_string(),
            role: Role::User,
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Sohan".to_string()),
            designation: "Data Analyst".to_string(),
            department: "Analytics".to_string(),
        },
        User {
            id: "u3".to_string(),
            name: "T Deepak".to_string(),
            email: "deepak@gmail.com".to_string(),
            password: "user123".to_string(),
            role: Role::User,
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Deepak".to_string()),
            designation: "DevOps Engineer".to_string(),
            department: "Infrastructure".to_string(),
        },
        User {
            id: "u4".to_string(),
            name: "Admin User".to_string(),
            email: "admin@gmail.com".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Admin".to_string()),
            designation: "Platform Administrator".to_string(),
            department: "Management".to_string(),
        },
    ]
}

pub fn seed_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "c1".to_string(),
            owner_id: "u1".to_string(),
            title: "AWS Certified Solutions Architect - Associate".to_string(),
            organization: "Amazon Web Services".to_string(),
            category: "Cloud".to_string(),
            issue_date: date(2024, 8, 10),
            expiry_date: Some(date(2027, 8, 10)),
            credential_id: Some("AWS-SAA-2024-0810".to_string()),
            certificate_url: Some("https://aws.amazon.com/verification".to_string()),
            badge_url: None,
            description: Some(
                "Validates expertise in designing distributed, scalable systems on AWS \
                 covering compute, storage, networking, and security."
                    .to_string(),
            ),
        },
        Certificate {
            id: "c2".to_string(),
            owner_id: "u1".to_string(),
            title: "Meta React Developer Certification".to_string(),
            organization: "Meta".to_string(),
            category: "Frontend".to_string(),
            issue_date: date(2024, 3, 15),
            expiry_date: Some(date(2026, 3, 10)),
            credential_id: Some("META-RD-2024-0315".to_string()),
            certificate_url: Some("https://coursera.org/verify/meta-react".to_string()),
            badge_url: None,
            description: Some(
                "Demonstrates proficiency in building modern React applications using \
                 hooks, context, and component-based architecture."
                    .to_string(),
            ),
        },
        Certificate {
            id: "c3".to_string(),
            owner_id: "u1".to_string(),
            title: "Google Cloud Professional Cloud Architect".to_string(),
            organization: "Google Cloud".to_string(),
            category: "Cloud".to_string(),
            issue_date: date(2022, 11, 20),
            expiry_date: Some(date(2024, 11, 20)),
            credential_id: Some("GCP-PCA-2022-1120".to_string()),
            certificate_url: Some("https://cloud.google.com/certification".to_string()),
            badge_url: None,
            description: Some(
                "Validates ability to design, develop, and manage robust, scalable \
                 solutions on Google Cloud Platform."
                    .to_string(),
            ),
        },
        Certificate {
            id: "c4".to_string(),
            owner_id: "u2".to_string(),
            title: "Tableau Desktop Specialist".to_string(),
            organization: "Tableau (Salesforce)".to_string(),
            category: "Data".to_string(),
            issue_date: date(2025, 5, 18),
            expiry_date: Some(date(2028, 5, 18)),
            credential_id: Some("TAB-DS-2025-0518".to_string()),
            certificate_url: Some("https://www.credly.com/badges/tableau".to_string()),
            badge_url: None,
            description: Some(
                "Demonstrates foundational skills in Tableau for data visualization, \
                 dashboard design, and publishing interactive reports."
                    .to_string(),
            ),
        },
        Certificate {
            id: "c5".to_string(),
            owner_id: "u2".to_string(),
            title: "Microsoft Power BI Data Analyst Associate".to_string(),
            organization: "Microsoft".to_string(),
            category: "Data".to_string(),
            issue_date: date(2024, 4, 1),
            expiry_date: Some(date(2026, 3, 8)),
            credential_id: Some("MS-PBI-2024-0401".to_string()),
            certificate_url: Some("https://learn.microsoft.com/credentials".to_string()),
            badge_url: None,
            description: Some(
                "Validates skills in transforming raw data into actionable insights \
                 using Power BI, including DAX and Power Query."
                    .to_string(),
            ),
        },
        Certificate {
            id: "c6".to_string(),
            owner_id: "u2".to_string(),
            title: "IBM Data Science Professional Certificate".to_string(),
            organization: "IBM".to_string(),
            category: "Data".to_string(),
            issue_date: date(2022, 7, 14),
            expiry_date: Some(date(2024, 7, 14)),
            credential_id: Some("IBM-DS-2022-0714".to_string()),
            certificate_url: Some("https://coursera.org/verify/ibm-data-science".to_string()),
            badge_url: None,
            description: Some(
                "Comprehensive program covering Python, SQL, data visualization, and \
                 applied machine learning."
                    .to_string(),
            ),
        },
        Certificate {
            id: "c7".to_string(),
            owner_id: "u3".to_string(),
            title: "Certified Kubernetes Administrator (CKA)".to_string(),
            organization: "CNCF / Linux Foundation".to_string(),
            category: "DevOps".to_string(),
            issue_date: date(2025, 9, 5),
            expiry_date: Some(date(2028, 9, 5)),
            credential_id: Some("CKA-2025-0905".to_string()),
            certificate_url: Some(
                "https://training.linuxfoundation.org/certification/cka".to_string(),
            ),
            badge_url: None,
            description: Some(
                "Validates skills required to operate, configure, and troubleshoot \
                 Kubernetes clusters in production."
                    .to_string(),
            ),
        },
        Certificate {
            id: "c8".to_string(),
            owner_id: "u3".to_string(),
            title: "Docker Certified Associate (DCA)".to_string(),
            organization: "Docker Inc.".to_string(),
            category: "DevOps".to_string(),
            issue_date: date(2024, 6, 20),
            expiry_date: Some(date(2026, 3, 15)),
            credential_id: Some("DCA-2024-0620".to_string()),
            certificate_url: Some("https://www.docker.com/certification".to_string()),
            badge_url: None,
            description: Some(
                "Proves expertise in containerization using Docker, including image \
                 management, networking, and orchestration."
                    .to_string(),
            ),
        },
        Certificate {
            id: "c9".to_string(),
            owner_id: "u3".to_string(),
            title: "HashiCorp Certified: Terraform Associate".to_string(),
            organization: "HashiCorp".to_string(),
            category: "DevOps".to_string(),
            issue_date: date(2022, 3, 30),
            expiry_date: Some(date(2024, 3, 30)),
            credential_id: Some("HCP-TF-2022-0330".to_string()),
            certificate_url: Some(
                "https://www.credly.com/badges/hashicorp-terraform".to_string(),
            ),
            badge_url: None,
            description: Some(
                "Validates understanding of Terraform for infrastructure as code, \
                 including modules, state management, and workspaces."
                    .to_string(),
            ),
        },
    ]
}
