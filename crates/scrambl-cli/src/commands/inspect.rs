use serde_json::json;

use scrambl_core::link::parse_link;
use scrambl_core::padding::PADDING_OVERHEAD;
use scrambl_core::transport::decode_base64_lenient;
use scrambl_core::Link;

use crate::cli::InspectArgs;
use crate::ui::{kv, UiContext};

/// Describe a link as JSON.
fn describe(link: &Link) -> serde_json::Value {
    match link {
        Link::Write(write) => json!({
            "kind": "write",
            "format": write.format,
            "key": write.tagged,
            "recipients": write.recipients,
        }),
        Link::Read(read) => {
            let envelope_bytes = decode_base64_lenient(&read.ciphertext).ok().map(|b| b.len());
            json!({
                "kind": "read",
                "lines": read.ciphertext.lines().count(),
                "envelope_bytes": envelope_bytes,
                "max_message_bytes": envelope_bytes.map(|n| n.saturating_sub(PADDING_OVERHEAD)),
            })
        }
    }
}

pub fn handle_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let link = parse_link(args.url.trim())?;
    let description = describe(&link);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&description)?);
        return Ok(());
    }

    let ctx = UiContext::for_stdout();
    match &link {
        Link::Write(write) => {
            println!("{}", kv(&ctx, "Kind", "write"));
            println!("{}", kv(&ctx, "Key", &write.tagged));
            for recipient in &write.recipients {
                let label = match recipient {
                    scrambl_core::Recipient::Email(_) => "Email",
                    scrambl_core::Recipient::Twitter(_) => "Twitter",
                };
                println!("{}", kv(&ctx, label, recipient.address()));
            }
        }
        Link::Read(_) => {
            println!("{}", kv(&ctx, "Kind", "read"));
            for field in ["lines", "envelope_bytes"] {
                let value = description[field].to_string();
                println!("{}", kv(&ctx, &field.replace('_', " "), &value));
            }
        }
    }
    Ok(())
}
