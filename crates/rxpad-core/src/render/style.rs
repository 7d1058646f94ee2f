/// Inline stylesheet for the printed prescription.
pub const STYLESHEET: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Helvetica Neue', Arial, sans-serif; padding: 40px; background: #fff; color: #1a202c; }
.header { border-bottom: 3px solid #0077B6; padding-bottom: 20px; margin-bottom: 30px; }
.clinic-name { font-size: 24px; font-weight: 700; color: #0077B6; margin-bottom: 8px; }
.doctor-info { font-size: 14px; color: #64748b; line-height: 1.6; }
.date-line { text-align: right; margin-bottom: 20px; font-size: 14px; color: #64748b; }
.template-image { text-align: center; margin-bottom: 20px; }
.template-image img { max-width: 100%; height: auto; max-height: 150px; }
.section { margin-bottom: 25px; padding: 16px; background: #f8fafb; border-radius: 8px; }
.section-title { font-size: 16px; font-weight: 600; color: #0077B6; margin-bottom: 12px; text-transform: uppercase; letter-spacing: 0.5px; }
.info-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; }
.info-item { font-size: 14px; }
.info-label { color: #64748b; font-weight: 500; }
.info-value { color: #1a202c; font-weight: 600; margin-top: 2px; }
.rx-symbol { font-size: 32px; font-weight: 700; color: #0077B6; margin-bottom: 10px; }
table { width: 100%; border-collapse: collapse; margin-top: 12px; background: white; }
th { background: #0077B6; color: white; padding: 12px 8px; text-align: left; font-size: 13px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.5px; }
td { padding: 12px 8px; font-size: 14px; }
tr.medication-row { border-bottom: 1px solid #e5e7eb; }
.med-name { font-weight: 600; font-size: 15px; color: #1a202c; }
.med-dosage { font-size: 13px; color: #64748b; margin-top: 2px; }
.notes { font-size: 14px; line-height: 1.6; color: #1a202c; }
.follow-up { font-size: 14px; font-weight: 600; color: #1a202c; }
.footer { margin-top: 40px; padding-top: 20px; border-top: 2px solid #e5e7eb; text-align: right; }
.signature { font-weight: 600; margin-top: 50px; color: #1a202c; }
"#;
