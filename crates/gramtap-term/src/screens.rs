//! Static text shown by the terminal prompt.

use std::path::Path;

fn banner(title: &str) -> String {
    // Underline width follows the title (emoji counts as two columns).
    let width = title.chars().count() + 3;
    format!("\n{title}\n{}\n\n", "=".repeat(width))
}

pub fn credentials_intro() -> String {
    let mut s = banner("🔐 Telegram API Credentials Setup");
    s.push_str("To use Gramtap, you need to provide your Telegram API credentials.\n");
    s.push_str("If you haven't created an app yet, visit https://my.telegram.org/apps\n\n");
    s
}

pub fn phone_intro() -> String {
    banner("📱 Phone Number Authentication")
}

pub fn code_intro() -> String {
    let mut s = banner("🔐 Verification Code");
    s.push_str("A verification code has been sent to your Telegram app.\n");
    s
}

pub fn password_intro() -> String {
    let mut s = banner("🔒 Two-Factor Authentication");
    s.push_str("Your account has 2FA enabled. Please enter your password.\n");
    s
}

pub fn success(config_path: &Path) -> String {
    let mut s = banner("✅ Configuration Complete!");
    s.push_str("🎉 Your Telegram API credentials have been saved successfully!\n");
    s.push_str(&format!(
        "📁 Configuration stored at: {}\n",
        config_path.display()
    ));
    s.push_str("\n🚀 You can now use Gramtap to access your Telegram account.\n");
    s.push_str("   Try running: gramtap status\n");
    s
}

pub fn failure(error: &str) -> String {
    let mut s = banner("❌ Configuration Failed");
    s.push_str(&format!("Error saving credentials: {error}\n"));
    s.push_str("\n💡 Try running the setup again with: gramtap login\n");
    s
}

pub fn question(text: &str) -> String {
    format!("? {text} ")
}

pub fn invalid(message: &str) -> String {
    format!("  ✖ {message}\n")
}

pub fn cancelled(message: &str) -> String {
    format!("\n❌ {message}\n")
}
