use anyhow::Result;
use tracing::info;

use crate::db::ClientRepository;
use crate::models::{ClientUpdate, SearchCriteria};
use crate::print_clients;

/// Populate the registry with sample clients and exercise every operation
pub async fn run(repo: &ClientRepository) -> Result<()> {
    repo.initialize_schema().await?;

    let boris = repo
        .add_client(
            "Boris",
            "Nefedov",
            Some("bornefed67@write.org"),
            &["+79534898123", "+74959956348"],
        )
        .await?;
    let maria = repo
        .add_client("Maria", "Barabanova", Some("marbarara99@pismo.net"), &[])
        .await?;
    repo.add_client("Boris", "Petrov", Some("petrbor444@letmail.org"), &[])
        .await?;
    repo.add_client("Alexey", "Petrov", Some("petralex_22@pismo.net"), &["+79845323457"])
        .await?;
    let elena = repo
        .add_client(
            "Elena",
            "Resnichenko",
            Some("lena_resnica562@write.org"),
            &["+79226067314"],
        )
        .await?;
    repo.add_client(
        "Karina",
        "Nemchinova",
        Some("karnem23karnem@letmail.org"),
        &["+79073382299"],
    )
    .await?;
    info!("sample clients added");

    repo.add_phone(boris, "+79611926348").await?;
    repo.add_phone(maria, "+79123445216").await?;

    repo.delete_phone(boris, "+79534898123").await?;
    repo.delete_client(maria).await?;

    let searches = [
        SearchCriteria::new().name("Boris"),
        SearchCriteria::new().surname("Petrov"),
        SearchCriteria::new().email("karnem23karnem@letmail.org"),
        SearchCriteria::new().phone("+79226067314"),
    ];
    for criteria in &searches {
        print_clients(&repo.find_clients(criteria).await?);
    }

    repo.update_client(
        elena,
        &ClientUpdate::new()
            .name("Irina")
            .surname("Krasnova")
            .email("redirina@topmail.com")
            .phone("+79226067314", "+79412347565"),
    )
    .await?;
    print_clients(&repo.find_clients(&SearchCriteria::new().name("Irina")).await?);

    Ok(())
}
