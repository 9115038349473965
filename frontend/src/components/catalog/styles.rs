//! Page stylesheet, injected by the catalog view.

pub const STYLESHEET: &str = r#"
.topbar.hidden { display: none; }

.home-screen {
    max-width: 720px;
    margin: 24px auto;
    text-align: center;
}

.outer-container {
    position: relative;
    max-width: 920px;
    margin: 16px auto;
    padding: 16px;
    background: #fff;
    box-shadow: 0 0 8px #ccc;
    border-radius: 6px;
}

.tooltip {
    position: absolute;
    top: -14px;
    left: 50%;
    transform: translateX(-50%);
    background: rgba(0, 0, 0, 0.8);
    color: #fff;
    padding: 8px 16px;
    border-radius: 4px;
    z-index: 100;
}

.text-container { margin-bottom: 12px; color: #555; }

.inner-container { display: flex; gap: 24px; }
.column { flex: 1; display: flex; flex-direction: column; gap: 8px; }
.form-item label { display: block; font-size: 13px; color: #333; }
.form-item input, .form-item textarea { width: 100%; padding: 6px; box-sizing: border-box; }
.large-text { min-height: 96px; resize: vertical; }

.submit-button {
    align-self: flex-start;
    padding: 8px 16px;
    border: none;
    border-radius: 4px;
    background: #1565c0;
    color: #fff;
    cursor: pointer;
}

.delete-button {
    margin-top: 12px;
    padding: 8px 16px;
    border: none;
    border-radius: 4px;
    background: #c62828;
    color: #fff;
    cursor: pointer;
}

.error-message { color: #c62828; font-size: 13px; }

.record-list-container { max-width: 920px; margin: 24px auto; }

.record-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
    gap: 16px;
}

.record-item {
    background: #fff;
    border-radius: 6px;
    box-shadow: 0 0 6px #ddd;
    padding: 12px;
    cursor: pointer;
    text-align: center;
}

.record-item .image-container img { width: 100%; height: 160px; object-fit: cover; }
.record-item .date { color: #999; font-size: 12px; }

.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.modal-content {
    position: relative;
    background: #fff;
    border-radius: 6px;
    padding: 24px;
    max-width: 640px;
    width: 90%;
    max-height: 90vh;
    overflow: auto;
}

.modal-content > img { width: 140px; margin-top: 12px; }

.close-button {
    position: absolute;
    top: 8px;
    right: 12px;
    border: none;
    background: none;
    font-size: 22px;
    cursor: pointer;
}
"#;
