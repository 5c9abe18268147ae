//! Server-rendered HTML for the checkout form and result pages.

use crate::core::Currency;
use html_escape::encode_text;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f3f4f6; margin: 0; }
.card { max-width: 28rem; margin: 2rem auto; padding: 1.5rem; background: #fff;
        border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); text-align: center; }
form { text-align: left; }
label { display: block; margin-bottom: 0.5rem; color: #374151; }
input { width: 100%; padding: 0.5rem; margin-bottom: 1rem; border: 1px solid #d1d5db;
        border-radius: 0.25rem; box-sizing: border-box; }
button, .button { display: inline-block; width: 100%; padding: 0.5rem 1rem; border: 0;
        border-radius: 0.25rem; color: #fff; background: #2563eb; text-decoration: none; }
button:disabled { background: #60a5fa; }
.error { margin-bottom: 1rem; padding: 0.75rem; background: #fee2e2; color: #b91c1c;
         border-radius: 0.25rem; }
.detail { font-size: 0.875rem; color: #4b5563; }
.ok { color: #16a34a; font-size: 3rem; }
.bad { color: #ef4444; font-size: 3rem; }
"#;

const FORM_SCRIPT: &str = r#"
const form = document.getElementById('payment-form');
const errorBox = document.getElementById('payment-error');
const button = document.getElementById('pay-button');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  button.disabled = true;
  button.textContent = 'Processing...';
  errorBox.hidden = true;
  try {
    const response = await fetch('/api/pesapal', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        amount: Number(form.amount.value),
        description: 'Service Payment',
        customer: { email: form.email.value },
      }),
    });
    const data = await response.json();
    if (!response.ok || !data.success) {
      throw new Error(data.error || 'Payment initiation failed');
    }
    window.location.href = data.redirectUrl;
  } catch (err) {
    errorBox.textContent = err instanceof Error ? err.message : 'Payment failed';
    errorBox.hidden = false;
    button.disabled = false;
    button.textContent = 'Pay with PesaPal';
  }
});
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"card\">\n{}\n</div>\n</body>\n</html>\n",
        encode_text(title),
        STYLE,
        body
    )
}

/// Checkout form; `failed` shows a banner after an abandoned callback
pub fn payment_form(currency: Currency, failed: bool) -> String {
    let banner = if failed {
        "<div class=\"error\">Your previous payment was not completed. Please try again.</div>\n"
    } else {
        ""
    };

    let body = format!(
        "<h1>Make a Payment</h1>\n{banner}\
         <div id=\"payment-error\" class=\"error\" hidden></div>\n\
         <form id=\"payment-form\">\n\
         <label for=\"amount\">Amount ({currency})</label>\n\
         <input id=\"amount\" name=\"amount\" type=\"number\" min=\"1\" step=\"any\" value=\"100\" required>\n\
         <label for=\"email\">Email</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\" required>\n\
         <button id=\"pay-button\" type=\"submit\">Pay with PesaPal</button>\n\
         </form>\n<script>{script}</script>",
        banner = banner,
        currency = currency,
        script = FORM_SCRIPT,
    );

    layout("Make a Payment", &body)
}

pub fn payment_success(tracking_id: Option<&str>) -> String {
    let detail = tracking_id
        .map(|id| {
            format!(
                "<p class=\"detail\">Transaction ID: {}</p>\n",
                encode_text(id)
            )
        })
        .unwrap_or_default();

    let body = format!(
        "<div class=\"ok\">&#10003;</div>\n<h1>Payment Successful!</h1>\n\
         <p>Thank you for your payment.</p>\n{}\
         <a class=\"button\" href=\"/\">Return Home</a>",
        detail
    );

    layout("Payment Successful", &body)
}

pub fn payment_failed(reason: Option<&str>, tracking_id: Option<&str>) -> String {
    let mut details = String::new();
    if let Some(reason) = reason {
        details.push_str(&format!(
            "<p class=\"detail\">Reason: {}</p>\n",
            encode_text(reason)
        ));
    }
    if let Some(id) = tracking_id {
        details.push_str(&format!(
            "<p class=\"detail\">Tracking ID: {}</p>\n",
            encode_text(id)
        ));
    }

    let body = format!(
        "<div class=\"bad\">&#10007;</div>\n<h1>Payment Failed</h1>\n\
         <p>We could not process your payment.</p>\n{}\
         <a class=\"button\" href=\"/\">Return Home</a>",
        details
    );

    layout("Payment Failed", &body)
}
