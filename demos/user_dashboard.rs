use chrono::Utc;

use certtrack::aggregate::{stats_for, upcoming_sorted};
use certtrack::auth::login;
use certtrack::seed::{seed_certificates, seed_users};
use certtrack::store::{CertificateStore, UserDirectory};

#[tokio::main]
async fn main() {
    println!("Single User Dashboard Demo\n");

    let users = UserDirectory::new(seed_users());
    let store = CertificateStore::seeded(seed_certificates());
    let now = Utc::now().date_naive();

    let user = match login(&users, "ashish@gmail.com", "user123") {
        Ok(user) => user,
        Err(e) => {
            eprintln!("login failed: {e}");
            return;
        }
    };
    println!("✓ Signed in as {} ({})", user.name, user.designation);

    let certs = store.list_by_owner(&user.id).await;
    let stats = stats_for(&certs, now);
    println!(
        "✓ {} certifications: {} active, {} expiring soon, {} expired",
        stats.total, stats.active, stats.expiring_soon, stats.expired
    );

    println!("\nUpcoming renewals:");
    for cert in upcoming_sorted(&certs, now) {
        println!(
            "  → {} ({} days left)",
            cert.title,
            cert.days_remaining(now).unwrap_or_default()
        );
    }
}
