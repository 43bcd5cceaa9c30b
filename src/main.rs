use anyhow::Context;
use chrono::Utc;
use log::info;

use certtrack::aggregate::{
    by_department, group_by_owner, monthly_expiry_buckets, stats_for, top_titles,
};
use certtrack::auth::login;
use certtrack::cert::{CertificateDraft, CertificatePatch};
use certtrack::report::{ExpiryWindow, build_expiry_report, export_inventory_csv, save_report_csv};
use certtrack::seed::{DEPARTMENTS, seed_certificates, seed_users};
use certtrack::status::Urgency;
use certtrack::store::{CertFilter, CertificateStore, StoreError, UserDirectory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("\n");
    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║                                                       ║");
    println!("║          CertTrack — Certification Dashboard          ║");
    println!("║                  Core Engine Demo                     ║");
    println!("║                                                       ║");
    println!("╚═══════════════════════════════════════════════════════╝");
    println!("\n");

    println!("Initializing in-memory collections...");
    let users = UserDirectory::new(seed_users());
    let store = CertificateStore::seeded(seed_certificates());
    let now = Utc::now().date_naive();
    println!("  → {} users, {} certificates\n", users.len(), store.len().await);

    println!("[1/6] Authenticating the admin account...");
    let admin =
        login(&users, "admin@gmail.com", "admin123").context("seeded admin login failed")?;
    println!("      ✓ Signed in: {} ({})\n", admin.name, admin.role);

    println!("[2/6] Computing org-wide statistics...");
    let snapshot = store.list().await;
    let stats = stats_for(&snapshot, now);
    println!("      ✓ Total: {}", stats.total);
    println!("      ✓ Active: {}", stats.active);
    println!("      ✓ Expiring soon: {}", stats.expiring_soon);
    println!("      ✓ Expired: {}\n", stats.expired);

    println!("[3/6] Breaking down by owner, department and title...");
    for group in group_by_owner(&snapshot, users.list(), now) {
        println!(
            "      → {:<18} {} certs ({} active / {} expiring / {} expired)",
            group.user.name,
            group.stats.total,
            group.stats.active,
            group.stats.expiring_soon,
            group.stats.expired
        );
    }
    for dept in by_department(&snapshot, users.list(), &DEPARTMENTS) {
        println!("      → {:<18} {} certs", dept.department, dept.count);
    }
    for entry in top_titles(&snapshot, 5) {
        println!("      → {}x {}", entry.count, entry.title);
    }
    println!();

    println!("[4/6] Expiry timeline (next 6 months)...");
    for bucket in monthly_expiry_buckets(&snapshot, now, 6) {
        let marker = match bucket.urgency {
            Urgency::Critical => "!!",
            Urgency::Warning => " !",
            Urgency::Ok => "  ",
        };
        println!("      {} {:<8} {} expiring", marker, bucket.month, bucket.count);
    }
    println!();

    println!("[5/6] Building the expiry report...");
    let rows = build_expiry_report(&snapshot, &users, ExpiryWindow::Days90, now);
    println!("      ✓ {} certs due within 90 days", rows.len());
    for row in &rows {
        println!(
            "      → {:<20} {:<44} {:>5} days  [{}]",
            row.user,
            row.certificate,
            row.days_left.unwrap_or_default(),
            row.status
        );
    }
    save_report_csv(&rows, "expiry_report.csv").context("saving expiry_report.csv")?;
    export_inventory_csv(&snapshot, &users, now, "certifications.csv")
        .context("saving certifications.csv")?;
    println!("      ✓ Saved expiry_report.csv and certifications.csv\n");

    println!("[6/6] Exercising the store...");
    let added = store
        .add(CertificateDraft {
            owner_id: admin.id.clone(),
            title: "Certified Information Systems Auditor".to_string(),
            organization: "ISACA".to_string(),
            category: "Security".to_string(),
            issue_date: now,
            expiry_date: now.checked_add_days(chrono::Days::new(365)),
            credential_id: Some("CISA-DEMO".to_string()),
            certificate_url: None,
            badge_url: None,
            description: None,
        })
        .await?;
    info!("added demo certificate {}", added.id);
    println!("      ✓ Added: {} ({})", added.title, added.id);

    let updated = store
        .update(
            &added.id,
            CertificatePatch {
                organization: Some("ISACA International".to_string()),
                ..Default::default()
            },
        )
        .await?;
    println!("      ✓ Updated organization: {}", updated.organization);

    let matches = store
        .filter(
            &CertFilter {
                query: Some("isaca".to_string()),
                ..Default::default()
            },
            &users,
            now,
        )
        .await;
    println!("      ✓ Filter \"isaca\" matched {} record(s)", matches.len());

    store.remove(&added.id).await?;
    match store.remove(&added.id).await {
        Err(StoreError::NotFound { .. }) => {
            println!("      ✓ Second delete correctly reported not-found")
        }
        other => println!("      ✗ Unexpected second-delete outcome: {:?}", other),
    }
    println!();

    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║                 Dashboard Snapshot                    ║");
    println!("╚═══════════════════════════════════════════════════════╝\n");
    println!("{}\n", serde_json::to_string_pretty(&stats)?);

    println!("Key Findings:");
    println!("  • {} of {} certifications need renewal action", stats.expiring_soon, stats.total);
    println!("  • {} already expired", stats.expired);
    println!("  • Reports exported to CSV in the current directory");
    println!();

    Ok(())
}
