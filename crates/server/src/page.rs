//! Inline HTML for the prediction form page
//!
//! One page serves both the empty form and the re-rendered form with a
//! prediction or an error message, mirroring the single-template flow
//! of the service.

/// Render the form page. At most one of `prediction_text` and
/// `error_text` is expected; both slots are server-generated strings,
/// never echoed user input.
pub fn render_page(prediction_text: Option<&str>, error_text: Option<&str>) -> String {
    let result = match (prediction_text, error_text) {
        (Some(text), _) => format!(r#"<p class="result">{text}</p>"#),
        (None, Some(text)) => format!(r#"<p class="error">{text}</p>"#),
        (None, None) => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Salarycast</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            max-width: 480px;
            margin: 50px auto;
            padding: 20px;
            background: #f5f5f5;
        }}
        .container {{
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        h1 {{
            color: #333;
            border-bottom: 3px solid #4CAF50;
            padding-bottom: 10px;
        }}
        label {{
            display: block;
            margin: 12px 0 4px;
            color: #555;
        }}
        input, select {{
            width: 100%;
            padding: 8px;
            box-sizing: border-box;
        }}
        button {{
            margin-top: 16px;
            padding: 10px 24px;
            background: #4CAF50;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }}
        .result {{
            margin-top: 16px;
            padding: 10px;
            background: #f9f9f9;
            border-left: 4px solid #4CAF50;
        }}
        .error {{
            margin-top: 16px;
            padding: 10px;
            background: #fff4f4;
            border-left: 4px solid #e53935;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Salary Prediction</h1>
        <form action="/predict" method="post">
            <label for="experience">Years of Experience</label>
            <input type="text" id="experience" name="experience" placeholder="e.g. 6">

            <label for="age">Age</label>
            <input type="text" id="age" name="age" placeholder="e.g. 30">

            <label for="gender">Gender</label>
            <select id="gender" name="gender">
                <option value="">Select...</option>
                <option value="Male">Male</option>
                <option value="Female">Female</option>
            </select>

            <label for="education">Education Level</label>
            <select id="education" name="education">
                <option value="">Select...</option>
                <option value="Bachelor's">Bachelor's</option>
                <option value="Master's">Master's</option>
                <option value="PhD">PhD</option>
            </select>

            <button type="submit">Predict</button>
        </form>
        {result}
    </div>
</body>
</html>
"#
    )
}
