//! Inline stylesheet and browser glue embedded in every generated page.

pub const INLINE_CSS: &str = r#"
body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; margin: 0; color: #1f2937; background: #f8fafc; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
h1 { color: #1e3a8a; margin-bottom: 0.5rem; }
.lead { color: #475569; }
.chart-wrapper { position: relative; height: 420px; background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
.scenario-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; margin: 2rem 0; }
.scenario-card { background: #fff; border-left: 4px solid var(--scenario-color, #1e3a8a); border-radius: 6px; padding: 1rem; }
.scenario-card h3 { margin: 0 0 0.5rem; font-size: 1rem; }
.accordion { margin: 1rem 0; background: #fff; border-radius: 6px; border: 1px solid #e2e8f0; }
.accordion-header { width: 100%; display: flex; justify-content: space-between; align-items: center; padding: 1rem; border: 0; background: none; font-size: 1rem; font-weight: 600; cursor: pointer; }
.accordion-content { display: none; padding: 0 1rem 1rem; overflow-x: auto; }
.accordion-content.active { display: block; }
.data-table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
.data-table th, .data-table td { padding: 0.5rem; border-bottom: 1px solid #e2e8f0; text-align: left; vertical-align: top; }
.data-table th { background: #1e3a8a; color: #fff; }
.data-table td.number { text-align: right; white-space: nowrap; font-variant-numeric: tabular-nums; }
"#;

pub const GLUE_JS: &str = r##"
document.addEventListener('DOMContentLoaded', function () {
    var configElement = document.getElementById('expenditure-chart-config');
    var canvas = document.getElementById('expenditureChart');
    if (configElement && canvas && typeof Chart !== 'undefined') {
        var config = JSON.parse(configElement.textContent);
        var fmt = config.formatting;
        delete config.formatting;
        config.options.plugins.tooltip.callbacks = {
            label: function (context) {
                return context.dataset.label + ': ' + context.parsed.y.toFixed(fmt.tooltipDecimals) + fmt.tooltipSuffix;
            }
        };
        config.options.scales.y.ticks = {
            callback: function (value) {
                return value.toFixed(fmt.tickDecimals) + fmt.tickSuffix;
            }
        };
        new Chart(canvas, config);
    }

    document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
        anchor.addEventListener('click', function (e) {
            var target = document.querySelector(this.getAttribute('href'));
            if (target) {
                e.preventDefault();
                target.scrollIntoView({ behavior: 'smooth', block: 'start' });
            }
        });
    });

    document.querySelectorAll('[data-accordion]').forEach(function (button) {
        button.addEventListener('click', function () {
            var id = button.getAttribute('data-accordion');
            var content = document.getElementById(id + '-content');
            var icon = document.getElementById(id + '-icon');
            if (!content || !icon) {
                return;
            }
            var open = content.classList.toggle('active');
            icon.textContent = open ? '▲' : '▼';
        });
    });

    if ('IntersectionObserver' in window) {
        var observer = new IntersectionObserver(function (entries) {
            entries.forEach(function (entry) {
                if (entry.isIntersecting) {
                    entry.target.style.opacity = '1';
                    entry.target.style.transform = 'translateY(0)';
                }
            });
        }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

        document.querySelectorAll('.scenario-card').forEach(function (card) {
            card.style.opacity = '0';
            card.style.transform = 'translateY(20px)';
            card.style.transition = 'opacity 0.6s ease, transform 0.6s ease';
            observer.observe(card);
        });
    }
});
"##;
