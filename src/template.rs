//! nginx server-block template.

/// Fields substituted into the server block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VhostConfig {
    pub root_dir: String,
    pub hostname: String,
    pub php_version: String,
}

const SERVER_BLOCK: &str = r#"
server {
	listen 80;
	listen [::]:80;

	root %root_dir%;

	index index.php index.html index.htm index.nginx-debian.html;

	charset utf-8;

	server_name %hostname%;
	error_page 404 /index.php;

	location / {
		try_files $uri $uri/ /index.php?$query_string;
	}

	location ~ \.php$ {
		include snippets/fastcgi-php.conf;
		fastcgi_param SCRIPT_FILENAME $realpath_root$fastcgi_script_name;
		fastcgi_pass unix:/var/run/php/php%php_version%-fpm.sock;
	}
}
"#;

/// Render the server block. Each placeholder is replaced once, in order
/// root dir, hostname, php version.
pub fn render(cfg: &VhostConfig) -> String {
    SERVER_BLOCK
        .replacen("%root_dir%", &cfg.root_dir, 1)
        .replacen("%hostname%", &cfg.hostname, 1)
        .replacen("%php_version%", &cfg.php_version, 1)
}
